//! Health check endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use super::AppState;
use crate::storage::StorageStats;

/// Liveness probe: the process is up and serving requests.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness report with the number of stored records
#[derive(Debug, Serialize)]
pub struct ReadinessReport {
    pub status: &'static str,
    #[serde(flatten)]
    pub stats: StorageStats,
}

/// Readiness probe.
///
/// ```text
/// GET /ready
/// {"status":"ready","events":3,"registrations":0,"contactMessages":0}
/// ```
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessReport> {
    Json(ReadinessReport {
        status: "ready",
        stats: state.storage.stats().await,
    })
}
