//! Data Transfer Objects
//!
//! Response types for the JSON API endpoints.

use serde::Serialize;

use crate::profile::DailyStatus;
use crate::timeline::TimelineEntry;

/// Timeline listing response
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    /// Number of entries
    pub total: usize,
    /// Entries in display order (newest first) with derived presentation
    pub entries: Vec<TimelineEntry>,
}

/// Latest-pull response; `latest` is null for an empty timeline
#[derive(Debug, Serialize)]
pub struct LatestPullResponse {
    pub latest: Option<TimelineEntry>,
}

/// Profile summary response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsr: Option<GameSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genshin: Option<GameSummary>,
}

/// Projection of one game's profile block
#[derive(Debug, Serialize)]
pub struct GameSummary {
    pub nickname: String,
    pub level: u32,
    pub achievements: u32,
    pub active_days: u32,
    pub avatar_count: u32,
    pub chest_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oculus: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moc_stars: Option<u32>,
    pub daily: DailyStatus,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded, or unhealthy
    pub status: String,
    /// Profile source reachability: ok or error
    pub profile_source: String,
    /// Sheet source reachability: ok or error
    pub sheet_source: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
