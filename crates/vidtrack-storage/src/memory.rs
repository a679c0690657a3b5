use async_trait::async_trait;
use parking_lot::RwLock;
use vidtrack_core::error::{Result, StorageError};
use vidtrack_core::{ListQuery, ReadRepository, Repository, Video, VideoId};

/// In-memory implementation of the repository traits.
///
/// Videos are kept in insertion order behind a single lock, matching the
/// ordering rules of [`CsvRepository`][crate::CsvRepository]. Nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    videos: RwLock<Vec<Video>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with `videos`, kept in the given order.
    ///
    /// Later duplicates of an id are dropped.
    pub fn with_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut stored: Vec<Video> = Vec::new();
        for video in videos {
            if !stored.iter().any(|v| v.id == video.id) {
                stored.push(video);
            }
        }
        Self {
            videos: RwLock::new(stored),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Video>> {
        let mut videos = self.videos.read().clone();
        query.apply(&mut videos);
        Ok(videos)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, video: Video) -> Result<Video> {
        let mut videos = self.videos.write();
        if videos.iter().any(|v| v.id == video.id) {
            return Err(StorageError::AlreadyExists(video.id));
        }
        videos.push(video.clone());
        Ok(video)
    }

    async fn update(&self, id: VideoId, video: Video) -> Result<Video> {
        let mut videos = self.videos.write();
        let slot = videos
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StorageError::NotFound(id))?;
        *slot = video.with_id(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: VideoId) -> Result<()> {
        let mut videos = self.videos.write();
        let index = videos
            .iter()
            .position(|v| v.id == id)
            .ok_or(StorageError::NotFound(id))?;
        videos.remove(index);
        Ok(())
    }
}
