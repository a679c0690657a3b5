use crate::store::CsvStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vidtrack_core::error::{Result, StorageError};
use vidtrack_core::{ListQuery, ReadRepository, Repository, Video, VideoId};

/// Repository backed by a CSV file.
///
/// File access is blocking, so each operation runs the underlying
/// [`CsvStore`] on tokio's blocking pool. Clones share one store and
/// therefore one lock.
#[derive(Debug, Clone)]
pub struct CsvRepository {
    store: Arc<CsvStore>,
}

impl CsvRepository {
    /// Creates a repository for the CSV file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(CsvStore::new(path)),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&CsvStore) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| StorageError::Io(format!("storage task failed: {e}")))?
    }
}

#[async_trait]
impl ReadRepository for CsvRepository {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Video>> {
        let query = *query;
        self.run(move |store| store.list(&query)).await
    }
}

#[async_trait]
impl Repository for CsvRepository {
    async fn insert(&self, video: Video) -> Result<Video> {
        self.run(move |store| store.insert(video)).await
    }

    async fn update(&self, id: VideoId, video: Video) -> Result<Video> {
        self.run(move |store| store.update(id, video)).await
    }

    async fn delete(&self, id: VideoId) -> Result<()> {
        self.run(move |store| store.delete(id)).await
    }
}
