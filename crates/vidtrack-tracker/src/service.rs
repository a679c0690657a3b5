use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use vidtrack_core::validate::validate_video;
use vidtrack_core::{ListQuery, Repository, StorageError, Tracker, TrackerError, Video, VideoId};

/// A concrete implementation of the `Tracker` trait.
///
/// This service wraps a `Repository` and handles:
/// - Validation of incoming records before any write
/// - Mapping storage outcomes into tracker errors
///
/// Listing never validates; whatever the repository decodes is returned.
#[derive(Debug)]
pub struct TrackerService<R> {
    repository: Arc<R>,
}

impl<R> Clone for TrackerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> TrackerService<R> {
    /// Creates a new `TrackerService` over `repository`.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository> Tracker for TrackerService<R> {
    async fn list(&self, query: ListQuery) -> Result<Vec<Video>, TrackerError> {
        let videos = self
            .repository
            .list(&query)
            .await
            .map_err(storage_to_tracker_error)?;
        debug!(
            count = videos.len(),
            sort_by = query.sort_by.map(|key| key.as_str()),
            order = %query.order,
            "listed videos"
        );
        Ok(videos)
    }

    async fn add(&self, video: Video) -> Result<Video, TrackerError> {
        if let Err(e) = validate_video(&video) {
            warn!(id = video.id, error = %e, "rejected new video");
            return Err(e.into());
        }

        let stored = self
            .repository
            .insert(video)
            .await
            .map_err(storage_to_tracker_error)?;
        info!(id = stored.id, "added video");
        Ok(stored)
    }

    async fn update(&self, id: VideoId, video: Video) -> Result<Video, TrackerError> {
        if let Err(e) = validate_video(&video) {
            warn!(id, error = %e, "rejected video update");
            return Err(e.into());
        }

        let stored = self
            .repository
            .update(id, video)
            .await
            .map_err(storage_to_tracker_error)?;
        info!(id, "updated video");
        Ok(stored)
    }

    async fn delete(&self, id: VideoId) -> Result<(), TrackerError> {
        self.repository
            .delete(id)
            .await
            .map_err(storage_to_tracker_error)?;
        info!(id, "deleted video");
        Ok(())
    }
}

/// Converts a StorageError to a TrackerError, logging unexpected failures.
fn storage_to_tracker_error(e: StorageError) -> TrackerError {
    match &e {
        StorageError::AlreadyExists(_) | StorageError::NotFound(_) => debug!(error = %e, "write refused"),
        StorageError::Io(_) | StorageError::InvalidData(_) => error!(error = %e, "storage failure"),
    }
    e.into()
}
