use crate::video::VideoId;
use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors returned by repository backends.
///
/// `AlreadyExists` and `NotFound` are expected outcomes of a write. `Io` and
/// `InvalidData` mean the backing collection itself could not be used and are
/// never reported as a missing record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("video with id {0} already exists")]
    AlreadyExists(VideoId),
    #[error("video with id {0} not found")]
    NotFound(VideoId),
    #[error("storage i/o failed: {0}")]
    Io(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

/// Rejections produced by the record validator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("post_date must be a valid date in YYYY-MM-DD format")]
    InvalidDate(String),
}

/// Errors surfaced by a [`Tracker`][crate::Tracker] to its callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Video with ID {0} already exists")]
    AlreadyExists(VideoId),
    #[error("Video with ID {0} not found")]
    NotFound(VideoId),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<StorageError> for TrackerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::AlreadyExists(id) => Self::AlreadyExists(id),
            StorageError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}
