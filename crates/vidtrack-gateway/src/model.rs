pub mod health;
pub mod video;

pub use health::HealthResponse;
pub use video::{ListParams, MessageResponse, VideoEnvelope, VideoList};
