use crate::error::Result;
use crate::query::ListQuery;
use crate::video::{Video, VideoId};
use async_trait::async_trait;

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored video ordered by `query`.
    ///
    /// A backing collection that does not exist yet is an empty listing,
    /// not an error.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Video>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a new video after the existing ones.
    /// Returns `Err(AlreadyExists)` without touching the collection if the id is taken.
    async fn insert(&self, video: Video) -> Result<Video>;

    /// Replaces the whole record stored under `id`, keeping its position.
    ///
    /// The stored record always carries `id`, whatever `video.id` says.
    /// Returns `Err(NotFound)` without touching the collection if `id` is unknown.
    async fn update(&self, id: VideoId, video: Video) -> Result<Video>;

    /// Removes the record stored under `id`.
    /// Returns `Err(NotFound)` without touching the collection if `id` is unknown.
    async fn delete(&self, id: VideoId) -> Result<()>;
}
