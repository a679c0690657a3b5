//! HTTP gateway for the video tracker.
//!
//! Translates the JSON wire format (`{"video": ...}`, `{"videos": [...]}`,
//! `{"message": ...}`) to and from [`Tracker`][vidtrack_core::Tracker] calls.

pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
