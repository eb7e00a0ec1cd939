//! Timeline Routes
//!
//! JSON views of the parsed pull history.
//!
//! - GET /api/v1/timeline - All entries with derived presentation
//! - GET /api/v1/timeline/latest - The distinguished most-recent pull

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{LatestPullResponse, TimelineResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::timeline::{derive_entries, TimelineEntry};

/// GET /api/v1/timeline
///
/// Parsed pull history, newest first, each entry carrying its badge, pity
/// color, icon URL, and tooltip.
pub async fn list_timeline(State(state): State<Arc<AppState>>) -> ApiResult<Json<TimelineResponse>> {
    let timeline = state.load_timeline().await?;
    let entries = derive_entries(&timeline, &state.config.sources.icon_base);

    Ok(Json(TimelineResponse {
        total: entries.len(),
        entries,
    }))
}

/// GET /api/v1/timeline/latest
///
/// The most recent pull, or null for an empty sheet (a valid state, not an
/// error).
pub async fn latest_pull(State(state): State<Arc<AppState>>) -> ApiResult<Json<LatestPullResponse>> {
    let timeline = state.load_timeline().await?;
    let latest = timeline
        .latest()
        .map(|record| TimelineEntry::derive(record, &state.config.sources.icon_base));

    Ok(Json(LatestPullResponse { latest }))
}
