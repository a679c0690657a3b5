use crate::error::Result;
use crate::extract::{AppJson, AppPath};
use crate::model::{ListParams, MessageResponse, VideoEnvelope, VideoList};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use vidtrack_core::{ListQuery, VideoId};

pub async fn list_videos_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<VideoList>> {
    let query = ListQuery::from_params(params.sort_by.as_deref(), params.order.as_deref());
    let videos = state.tracker().list(query).await?;
    Ok(Json(VideoList { videos }))
}

pub async fn create_video_handler(
    State(state): State<AppState>,
    AppJson(request): AppJson<VideoEnvelope>,
) -> Result<(StatusCode, Json<VideoEnvelope>)> {
    let video = state.tracker().add(request.video).await?;
    Ok((StatusCode::CREATED, Json(VideoEnvelope { video })))
}

pub async fn update_video_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<VideoId>,
    AppJson(request): AppJson<VideoEnvelope>,
) -> Result<Json<VideoEnvelope>> {
    let video = state.tracker().update(id, request.video).await?;
    Ok(Json(VideoEnvelope { video }))
}

pub async fn delete_video_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<VideoId>,
) -> Result<Json<MessageResponse>> {
    state.tracker().delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("Video with ID {id} deleted successfully"),
    }))
}
