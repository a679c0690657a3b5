//! Core types and traits for the video tracker.
//!
//! This crate holds the record type, the write-time validator, listing
//! order rules and the contracts implemented by the storage backends and
//! the tracker service.

pub mod error;
pub mod query;
pub mod repository;
pub mod tracker;
pub mod validate;
pub mod video;

pub use error::{StorageError, TrackerError, ValidationError};
pub use query::{sort_videos, ListQuery, SortKey, SortOrder};
pub use repository::{ReadRepository, Repository};
pub use tracker::Tracker;
pub use video::{Video, VideoId};
