use serde::{Deserialize, Serialize};

/// Primary key of a [`Video`].
pub type VideoId = i64;

/// Metadata tracked for a single video.
///
/// `post_date` is kept as the raw `YYYY-MM-DD` text it was stored with. It is
/// validated on write by [`validate_video`][crate::validate::validate_video]
/// but never re-checked on read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub name: String,
    pub href: String,
    pub post_date: String,
    pub views_count: u64,
}

impl Video {
    /// Returns the record with its `id` replaced.
    ///
    /// Updates key on the path id, so any id carried inside the replacement
    /// body is overridden with this.
    pub fn with_id(self, id: VideoId) -> Self {
        Self { id, ..self }
    }
}
