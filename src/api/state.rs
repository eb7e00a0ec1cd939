//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::profile::StatsDocument;
use crate::source::DataSource;
use crate::timeline::{parse_sheet, Timeline};

use super::error::ApiResult;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Fetcher for the profile and sheet documents
    pub source: DataSource,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source = DataSource::new(Duration::from_secs(config.sources.request_timeout_secs));
        Self {
            source,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Fetch and decode the stats profile document. Every call re-fetches;
    /// there is no cache and a full reload is the only refresh path.
    pub async fn load_profile(&self) -> ApiResult<StatsDocument> {
        let body = self.source.fetch_text(&self.config.sources.profile).await?;
        Ok(StatsDocument::parse(&body)?)
    }

    /// Fetch and parse the pull-history sheet, newest first.
    pub async fn load_timeline(&self) -> ApiResult<Timeline> {
        let body = self.source.fetch_text(&self.config.sources.sheet).await?;
        Ok(parse_sheet(&body)?)
    }
}
