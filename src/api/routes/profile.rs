//! Profile Route
//!
//! JSON projection of the stats profile document.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{GameSummary, ProfileResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::profile::{GenshinProfile, HsrProfile};

/// GET /api/v1/profile
///
/// Per-game summaries; a game absent from the document is absent here too.
pub async fn get_profile(State(state): State<Arc<AppState>>) -> ApiResult<Json<ProfileResponse>> {
    let doc = state.load_profile().await?;

    Ok(Json(ProfileResponse {
        last_updated: doc.last_updated,
        hsr: doc.hsr.as_ref().map(hsr_summary),
        genshin: doc.genshin.as_ref().map(genshin_summary),
    }))
}

fn hsr_summary(profile: &HsrProfile) -> GameSummary {
    GameSummary {
        nickname: profile.nickname.clone(),
        level: profile.level,
        achievements: profile.achievements,
        active_days: profile.active_days,
        avatar_count: profile.avatar_count,
        chest_count: profile.chest_count,
        oculus: None,
        moc_stars: Some(profile.moc_stars()),
        daily: profile.daily_status(),
    }
}

fn genshin_summary(profile: &GenshinProfile) -> GameSummary {
    GameSummary {
        nickname: profile.nickname.clone(),
        level: profile.level,
        achievements: profile.achievements,
        active_days: profile.active_days,
        avatar_count: profile.avatar_count,
        chest_count: profile.chest_count,
        oculus: Some(profile.oculus),
        moc_stars: None,
        daily: profile.daily_status(),
    }
}
