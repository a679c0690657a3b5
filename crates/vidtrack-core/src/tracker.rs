use crate::error::TrackerError;
use crate::query::ListQuery;
use crate::video::{Video, VideoId};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, TrackerError>;

/// Operations exposed to boundary layers such as the HTTP gateway.
#[async_trait]
pub trait Tracker: Send + Sync + 'static {
    /// Lists tracked videos, optionally sorted.
    async fn list(&self, query: ListQuery) -> Result<Vec<Video>>;

    /// Validates and stores a new video, returning the stored record.
    async fn add(&self, video: Video) -> Result<Video>;

    /// Validates and fully replaces the video stored under `id`.
    async fn update(&self, id: VideoId, video: Video) -> Result<Video>;

    /// Deletes the video stored under `id`.
    async fn delete(&self, id: VideoId) -> Result<()>;
}
