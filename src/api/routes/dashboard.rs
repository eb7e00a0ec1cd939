//! Dashboard Route
//!
//! Serves the rendered dashboard page. The profile and timeline documents
//! are loaded independently; a failure in either is logged and leaves that
//! section of the page empty, never failing the whole request.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::render::render_page;

/// GET /
///
/// Render the dashboard from freshly-fetched source documents.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let (profile, timeline) = tokio::join!(state.load_profile(), state.load_timeline());

    let profile = match profile {
        Ok(doc) => Some(doc),
        Err(e) => {
            tracing::error!("Failed to load profile: {}", e);
            None
        }
    };

    let timeline = match timeline {
        Ok(timeline) => Some(timeline),
        Err(e) => {
            tracing::error!("Failed to load timeline: {}", e);
            None
        }
    };

    Html(render_page(
        profile.as_ref(),
        timeline.as_ref(),
        &state.config.sources.icon_base,
    ))
}
