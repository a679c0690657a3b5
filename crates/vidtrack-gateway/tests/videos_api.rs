use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use vidtrack_gateway::{App, AppState};
use vidtrack_storage::{CsvRepository, InMemoryRepository};
use vidtrack_test_infra::CsvFixture;
use vidtrack_tracker::TrackerService;

fn in_memory_app() -> Router {
    let tracker = TrackerService::new(InMemoryRepository::new());
    App::router(AppState::new(Arc::new(tracker)))
}

fn csv_app(fixture: &CsvFixture) -> Router {
    let tracker = TrackerService::new(CsvRepository::new(fixture.path()));
    App::router(AppState::new(Arc::new(tracker)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn video(id: i64, name: &str, post_date: &str, views_count: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "href": format!("https://videos.example/{id}"),
        "post_date": post_date,
        "views_count": views_count,
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = in_memory_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_then_list() {
    let app = in_memory_app();
    let cooking = video(10, "Cooking 101", "2023-11-05", 4821);

    let (status, body) = send(
        &app,
        Method::POST,
        "/videos/",
        Some(json!({ "video": cooking })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "video": cooking }));

    let (status, body) = send(&app, Method::GET, "/videos/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "videos": [cooking] }));
}

#[tokio::test]
async fn duplicate_create_conflicts() {
    let app = in_memory_app();
    let first = video(1, "first", "2024-01-01", 1);
    send(&app, Method::POST, "/videos/", Some(json!({ "video": first }))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/videos/",
        Some(json!({ "video": video(1, "second", "2024-02-02", 2) })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "message": "Video with ID 1 already exists" }));
}

#[tokio::test]
async fn invalid_date_is_a_bad_request() {
    let app = in_memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/videos/",
        Some(json!({ "video": video(1, "leap", "2023-02-29", 1) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "post_date must be a valid date in YYYY-MM-DD format" })
    );

    let (_, body) = send(&app, Method::GET, "/videos/", None).await;
    assert_eq!(body, json!({ "videos": [] }));
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = in_memory_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/videos/",
        Some(json!({ "video": { "id": 1, "name": "missing fields" } })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn update_forces_the_path_id() {
    let app = in_memory_app();
    send(
        &app,
        Method::POST,
        "/videos/",
        Some(json!({ "video": video(7, "old", "2020-01-01", 1) })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/videos/7/",
        Some(json!({ "video": video(99, "new", "2021-06-30", 77) })),
    )
    .await;

    let mut expected = video(99, "new", "2021-06-30", 77);
    expected["id"] = json!(7);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "video": expected }));

    let (_, body) = send(&app, Method::GET, "/videos/", None).await;
    assert_eq!(body, json!({ "videos": [expected] }));
}

#[tokio::test]
async fn update_missing_video_is_not_found() {
    let app = in_memory_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/videos/3/",
        Some(json!({ "video": video(3, "ghost", "2024-01-01", 0) })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Video with ID 3 not found" }));
}

#[tokio::test]
async fn delete_removes_video() {
    let app = in_memory_app();
    send(
        &app,
        Method::POST,
        "/videos/",
        Some(json!({ "video": video(5, "gone", "2024-01-01", 0) })),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, "/videos/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Video with ID 5 deleted successfully" })
    );

    let (status, body) = send(&app, Method::DELETE, "/videos/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Video with ID 5 not found" }));
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = in_memory_app();

    let (status, body) = send(&app, Method::DELETE, "/videos/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn list_honours_sort_parameters() {
    let app = in_memory_app();
    for (id, name, views) in [(1, "banana", 300), (2, "Apple", 100), (3, "cherry", 200)] {
        send(
            &app,
            Method::POST,
            "/videos/",
            Some(json!({ "video": video(id, name, "2024-01-01", views) })),
        )
        .await;
    }

    let ids = |body: Value| -> Vec<i64> {
        body["videos"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_i64().unwrap())
            .collect()
    };

    let (_, body) = send(&app, Method::GET, "/videos/?sort_by=name", None).await;
    assert_eq!(ids(body), [2, 1, 3]);

    let (_, body) = send(
        &app,
        Method::GET,
        "/videos/?sort_by=views_count&order=DESC",
        None,
    )
    .await;
    assert_eq!(ids(body), [1, 3, 2]);

    let (_, body) = send(&app, Method::GET, "/videos/?sort_by=unknown", None).await;
    assert_eq!(ids(body), [1, 2, 3]);
}

#[tokio::test]
async fn csv_backend_persists_across_routers() {
    let fixture = CsvFixture::new().unwrap();
    let cooking = video(10, "Cooking 101", "2023-11-05", 4821);

    send(
        &csv_app(&fixture),
        Method::POST,
        "/videos/",
        Some(json!({ "video": cooking })),
    )
    .await;
    let (status, body) = send(&csv_app(&fixture), Method::GET, "/videos/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "videos": [cooking] }));
    assert!(fixture.read().unwrap().starts_with("id,name,href,post_date,views_count\r\n"));
}

#[tokio::test]
async fn storage_failure_is_a_server_error() {
    let fixture = CsvFixture::new().unwrap();
    std::fs::create_dir_all(fixture.path()).unwrap();
    std::fs::write(fixture.path().join("stray"), "x").unwrap();
    let app = csv_app(&fixture);

    let (status, body) = send(&app, Method::DELETE, "/videos/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().starts_with("storage failure"));
}
