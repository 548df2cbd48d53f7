#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tutorhub_api::config::{LogFormat, ServerConfig};
use tutorhub_api::router::build_app_router;
use tutorhub_api::state::AppState;
use tutorhub_db::store::{MemoryStore, TutoringStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The router is cheap to clone; every clone shares the same store, so a
/// test can seed data with one request and observe it with the next.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()))
}

pub fn build_test_app_with(store: Arc<dyn TutoringStore>) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

/// POST a body verbatim with a JSON content type.
pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn put_empty(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Unwrap the `data` envelope of a successful response.
pub async fn data(response: Response<Body>) -> Value {
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

pub async fn create_tutor(app: &Router, name: &str, price: f64) -> i64 {
    let response = post_json(
        app,
        "/api/v1/tutors",
        json!({
            "name": name,
            "qualifications": "MSc Mathematics",
            "subjects": ["Algebra", "Calculus"],
            "price": price,
        }),
    )
    .await;
    data(response).await["id"].as_i64().unwrap()
}

pub async fn create_student(app: &Router, name: &str) -> i64 {
    let response = post_json(app, "/api/v1/students", json!({ "name": name })).await;
    data(response).await["id"].as_i64().unwrap()
}

pub async fn book_session(app: &Router, tutor_id: i64, student_id: i64) -> i64 {
    let response = post_json(
        app,
        "/api/v1/sessions",
        json!({
            "tutor_id": tutor_id,
            "student_id": student_id,
            "session_date": "2026-03-02",
            "start_time": "15:30",
            "duration_hours": 1.5,
        }),
    )
    .await;
    data(response).await["id"].as_i64().unwrap()
}

/// Book a session and walk it through Accepted to Completed.
pub async fn completed_session(app: &Router, tutor_id: i64, student_id: i64) -> i64 {
    let id = book_session(app, tutor_id, student_id).await;
    put_json(
        app,
        &format!("/api/v1/sessions/{id}/status"),
        json!({ "status": "Accepted" }),
    )
    .await;
    put_empty(app, &format!("/api/v1/sessions/{id}/complete")).await;
    id
}
