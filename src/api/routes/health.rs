//! Health Routes
//!
//! Health check endpoints for monitoring and probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status including source reachability

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the server is up. The dashboard renders (with empty
/// sections) even when its sources are down, so readiness does not gate on
/// them.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with per-source reachability.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let profile_ok = state.load_profile().await.is_ok();
    let sheet_ok = state.load_timeline().await.is_ok();

    let overall_status = if profile_ok && sheet_ok {
        "healthy"
    } else if profile_ok || sheet_ok {
        "degraded"
    } else {
        "unhealthy"
    };

    let status_str = |ok: bool| if ok { "ok" } else { "error" }.to_string();

    Json(HealthResponse {
        status: overall_status.to_string(),
        profile_source: status_str(profile_ok),
        sheet_source: status_str(sheet_ok),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
