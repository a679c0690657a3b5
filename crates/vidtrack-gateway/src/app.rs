use axum::routing::{delete, get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_video_handler, delete_video_handler, health_handler, list_videos_handler,
    update_video_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/videos/",
                get(list_videos_handler).post(create_video_handler),
            )
            .route("/videos/{id}/", put(update_video_handler))
            .route("/videos/{id}", delete(delete_video_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
