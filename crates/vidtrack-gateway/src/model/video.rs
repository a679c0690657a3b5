use serde::{Deserialize, Serialize};
use vidtrack_core::Video;

/// A single video, used in requests and responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoEnvelope {
    pub video: Video,
}

/// Response body of a listing.
#[derive(Debug, Serialize)]
pub struct VideoList {
    pub videos: Vec<Video>,
}

/// Response containing a simple message string.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string of a listing. Values are interpreted leniently: an unknown
/// `sort_by` means no sorting and any `order` but `desc` is ascending.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
