//! Test helpers module
//!
//! Builds the router in-process and drives it with `tower::ServiceExt::oneshot`,
//! so no socket is bound during tests.

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use games_connect::config::Settings;
use games_connect::server::build_state;
use games_connect::StorageService;

/// Largest response body the helpers will read
const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Test application: router plus a handle on its store
pub struct TestApp {
    pub router: Router,
    pub storage: StorageService,
}

impl TestApp {
    /// Seeded application with default settings
    pub async fn new() -> Self {
        Self::with_settings(Settings::default()).await
    }

    pub async fn with_settings(settings: Settings) -> Self {
        let state = build_state(settings).await;
        let storage = state.storage.clone();
        Self {
            router: games_connect::build_router(state),
            storage,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        let bytes = serde_json::to_vec(body).expect("serialize request body");
        self.send(Method::POST, uri, Some(bytes)).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(body.as_bytes().to_vec())).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Vec<u8>>) -> TestResponse {
        self.send_request(build_request(method, uri, body, None)).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("route request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), MAX_RESPONSE_BYTES)
            .await
            .expect("read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, headers, body }
    }
}

/// Build a request, optionally with a JSON body and a request id header
pub fn build_request(method: Method, uri: &str, body: Option<Vec<u8>>, request_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(request_id) = request_id {
        builder = builder.header("x-request-id", request_id);
    }

    match body {
        Some(bytes) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    }
}
