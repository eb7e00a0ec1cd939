//! Game Profiles
//!
//! Models and projections for the fetched stats document: per-game profile
//! blocks, the Memory of Chaos challenge summary, and the "today's activity"
//! mini-panel values.

pub mod model;
pub mod summary;

pub use model::{
    FloorData, GenshinProfile, HsrProfile, MemoryOfChaos, MocAvatar, ProfileError, StatsDocument,
};
pub use summary::{
    DailyStatus, DAILY_TASK_CAP, DAILY_TRAINING_CAP, RESIN_CAP, TRAILBLAZE_POWER_CAP,
};
