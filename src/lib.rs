//! # Pullboard
//!
//! Personal gacha-progress dashboard. Pullboard ingests two documents - a
//! JSON stats profile and a CSV pull-history sheet - derives the
//! presentation data the page needs (pity color scale, outcome badges, item
//! icon URLs, daily-status panels), and serves the rendered dashboard plus a
//! small JSON API.
//!
//! ## Modules
//!
//! - [`timeline`]: Pull-history parsing, ordering, and display derivation
//! - [`profile`]: Stats document models and daily-status projection
//! - [`render`]: Server-side HTML templating for the dashboard page
//! - [`source`]: Resolution of configured locations to document text
//! - [`api`]: HTTP layer built with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use pullboard::timeline::{parse_sheet, pity_color};
//!
//! let sheet = "Date,Banner,ID,Character,Result,Pity\n\
//!              2024-01-01,BannerA,20010,Item X,W,73";
//! let timeline = parse_sheet(sheet)?;
//!
//! let latest = timeline.latest().unwrap();
//! assert!(latest.is_light_cone());
//! assert_eq!(pity_color(73).to_hex(), "#ef9e6e");
//! # Ok::<(), pullboard::timeline::SheetError>(())
//! ```

pub mod api;
pub mod config;
pub mod profile;
pub mod render;
pub mod source;
pub mod timeline;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};
pub use config::{Config, ConfigError};
pub use profile::{GenshinProfile, HsrProfile, ProfileError, StatsDocument};
pub use render::render_page;
pub use source::{DataSource, SourceError};
pub use timeline::{parse_sheet, Outcome, PullRecord, SheetError, Timeline, TimelineEntry};
