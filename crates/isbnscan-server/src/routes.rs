//! HTTP surface of the remote mirror.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET`  | `/api/scans` | `200 { version, items }`, always |
//! | `POST` | `/api/scans` | `200` normalized payload, or `500 { error }` if it could not be written |
//!
//! The POST body may be the enveloped document or a bare array. It is read as
//! JSON whatever its `Content-Type`, normalized before it is stored, and what
//! was stored is echoed back. An empty body counts as `{}`. A body that is not
//! JSON at all gets `400 { error }`.
//!
//! File I/O runs on the blocking pool.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use isbnscanapp::model::ScanCollection;
use isbnscanapp::store::mirror::MirrorFile;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, warn};

pub const SCANS_ROUTE: &str = "/api/scans";
pub const BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct MirrorState {
    pub mirror: Arc<MirrorFile>,
}

pub fn create_router(mirror: MirrorFile) -> Router {
    let state = MirrorState {
        mirror: Arc::new(mirror),
    };
    Router::new()
        .route(SCANS_ROUTE, get(get_scans).post(replace_scans))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn get_scans(State(state): State<MirrorState>) -> impl IntoResponse {
    let mirror = state.mirror.clone();
    let collection = tokio::task::spawn_blocking(move || mirror.read())
        .await
        .unwrap_or_else(|e| {
            error!("Read task failed: {}", e);
            ScanCollection::empty()
        });
    debug!("Serving {} scans", collection.len());
    Json(collection)
}

async fn replace_scans(State(state): State<MirrorState>, body: Bytes) -> Response {
    let payload = match parse_body(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejected POST body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid JSON body" })),
            )
                .into_response();
        }
    };

    let mirror = state.mirror.clone();
    match tokio::task::spawn_blocking(move || mirror.replace(&payload)).await {
        Ok(Ok(saved)) => Json(saved).into_response(),
        Ok(Err(_)) => save_failed(),
        Err(e) => {
            error!("Write task failed: {}", e);
            save_failed()
        }
    }
}

fn parse_body(body: &[u8]) -> serde_json::Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
}

fn save_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to save scans" })),
    )
        .into_response()
}
