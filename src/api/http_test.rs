use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};

use super::*;
use crate::config::{Environment, Timeouts};

type Seen = Arc<Mutex<Vec<String>>>;

async fn record_like(State((seen, status)): State<(Seen, StatusCode)>, Path(id): Path<String>) -> StatusCode {
    seen.lock().unwrap().push(id);
    status
}

/// Start a backend on an ephemeral port that answers every like with `status`.
async fn spawn_backend(status: StatusCode) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/messages/{id}/like", post(record_like))
        .with_state((seen.clone(), status));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

/// Start a backend that rejects likes the way an unauthenticated session is
/// rejected: redirect to `/`, which renders a 200 page.
async fn spawn_unauthorized_backend() -> String {
    let app = Router::new()
        .route("/messages/{id}/like", post(|| async { Redirect::to("/") }))
        .route("/", get(|| async { "Access unauthorized." }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn config_for(base_url: &str) -> LikesConfig {
    LikesConfig::for_environment(Environment::Local)
        .with_base_url(base_url)
        .with_timeouts(Timeouts { request_secs: 5, connect_secs: 2 })
}

#[tokio::test]
async fn toggle_like_posts_to_message_route() {
    let (base_url, seen) = spawn_backend(StatusCode::OK).await;
    let api = HttpLikeApi::new(&config_for(&base_url)).unwrap();

    api.toggle_like("42").await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["42".to_string()]);
}

#[tokio::test]
async fn toggle_like_issues_one_request_per_call() {
    let (base_url, seen) = spawn_backend(StatusCode::OK).await;
    let api = HttpLikeApi::new(&config_for(&base_url)).unwrap();

    api.toggle_like("7").await.unwrap();
    api.toggle_like("7").await.unwrap();

    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn toggle_like_maps_server_error_to_status() {
    let (base_url, seen) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR).await;
    let api = HttpLikeApi::new(&config_for(&base_url)).unwrap();

    let err = api.toggle_like("1").await.unwrap_err();

    assert_eq!(err, LikeError::Status { status: 500 });
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn toggle_like_maps_unknown_route_to_status() {
    let (base_url, _) = spawn_backend(StatusCode::OK).await;
    let api = HttpLikeApi::new(&config_for(&format!("{base_url}/missing"))).unwrap();

    let err = api.toggle_like("1").await.unwrap_err();

    assert_eq!(err, LikeError::Status { status: 404 });
}

#[tokio::test]
async fn toggle_like_treats_redirect_as_rejection() {
    let base_url = spawn_unauthorized_backend().await;
    let api = HttpLikeApi::new(&config_for(&base_url)).unwrap();

    let err = api.toggle_like("7").await.unwrap_err();

    assert_eq!(err, LikeError::Status { status: 303 });
}

#[tokio::test]
async fn toggle_like_reports_connection_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = HttpLikeApi::new(&config_for(&format!("http://{addr}"))).unwrap();

    let err = api.toggle_like("1").await.unwrap_err();

    assert!(matches!(err, LikeError::Request(_)));
}

#[test]
fn new_trims_trailing_slash() {
    let config = LikesConfig { base_url: "http://127.0.0.1:5000/".into(), ..LikesConfig::default() };
    let api = HttpLikeApi::new(&config).unwrap();
    assert_eq!(api.base_url(), "http://127.0.0.1:5000");
}
