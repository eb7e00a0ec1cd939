//! Daily Status Projection
//!
//! Projects the optional "today's activity" counters into the mini-stat
//! panel values. Missing counters read as zero, and the "logged in today"
//! flag is simply counter != 0 (completing the daily task implies a login).

use serde::Serialize;

use super::model::{GenshinProfile, HsrProfile};

/// Trailblaze Power cap shown in the HSR panel
pub const TRAILBLAZE_POWER_CAP: u32 = 300;
/// Daily Training score cap shown in the HSR panel
pub const DAILY_TRAINING_CAP: u32 = 500;
/// Original Resin cap shown in the Genshin panel
pub const RESIN_CAP: u32 = 200;
/// Daily commission count shown in the Genshin panel
pub const DAILY_TASK_CAP: u32 = 4;

/// "Today's Status" values for one game.
#[derive(Debug, Clone, Serialize)]
pub struct DailyStatus {
    pub resource_label: &'static str,
    pub resource: u32,
    pub resource_cap: u32,
    pub task_label: &'static str,
    pub tasks: u32,
    pub task_cap: u32,
    pub logged_in_today: bool,
}

impl HsrProfile {
    pub fn daily_status(&self) -> DailyStatus {
        let tasks = self.current_train_score.unwrap_or(0);
        DailyStatus {
            resource_label: "Trailblaze Power",
            resource: self.stamina.unwrap_or(0),
            resource_cap: TRAILBLAZE_POWER_CAP,
            task_label: "Daily Training",
            tasks,
            task_cap: DAILY_TRAINING_CAP,
            logged_in_today: tasks != 0,
        }
    }
}

impl GenshinProfile {
    pub fn daily_status(&self) -> DailyStatus {
        let tasks = self.daily_task.unwrap_or(0);
        DailyStatus {
            resource_label: "Resin",
            resource: self.resin.unwrap_or(0),
            resource_cap: RESIN_CAP,
            task_label: "Daily Tasks",
            tasks,
            task_cap: DAILY_TASK_CAP,
            logged_in_today: tasks != 0,
        }
    }
}
