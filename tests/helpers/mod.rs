use std::sync::Arc;

use axum::{Router, body::Body, http::Request};
use folio::AppState;
use folio_notification::{ContactRelay, MemoryTransport};
use http_body_util::BodyExt;

pub const CONTACT_ADDRESS: &str = "owner@folio.localhost";

pub fn setup_app(transport: MemoryTransport) -> Router {
    let relay = ContactRelay::new(Arc::new(transport), CONTACT_ADDRESS);

    folio::router(AppState { relay })
}

#[allow(dead_code)]
pub fn post_json(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/send-email")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("valid request")
}

#[allow(dead_code)]
pub async fn read_json(response: axum::response::Response) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}
