//! Pull Timeline
//!
//! Ingestion and derivation pipeline for the pull-history sheet: parse the
//! CSV body into typed records, order them newest first, and derive the
//! presentation values (badge, pity color, icon URL, tooltip) each record is
//! displayed with.

pub mod color;
pub mod record;
pub mod sheet;
pub mod view;

pub use color::{pity_color, Rgb, PITY_BREAK, PITY_MAX, PITY_MIN};
pub use record::{Outcome, PullRecord, LIGHT_CONE_ID_FLOOR};
pub use sheet::{parse_sheet, SheetError, Timeline};
pub use view::{badge, derive_entries, icon_url, tooltip, Badge, TimelineEntry, DEFAULT_ICON_BASE};
