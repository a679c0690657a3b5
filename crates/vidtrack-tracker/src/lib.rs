//! Video tracker service implementation.
//!
//! This crate provides the [`TrackerService`] that boundary layers call into.
//! Core types are re-exported from `vidtrack_core`.

pub mod service;

pub use service::TrackerService;
pub use vidtrack_core::{ListQuery, SortKey, SortOrder, Tracker, TrackerError, Video, VideoId};
