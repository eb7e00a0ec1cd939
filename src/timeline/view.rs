//! Timeline Presentation
//!
//! Derives display values for parsed pull records: outcome badges, pity
//! colors, item icon URLs, and tooltip text. All derivations are pure
//! functions of the record; nothing here fetches or validates the referenced
//! remote assets (a missing icon is a broken image, not an error).

use serde::Serialize;

use super::color::{pity_color, Rgb, PITY_MIN};
use super::record::{Outcome, PullRecord};
use super::sheet::Timeline;

/// Default base URL for item icons.
pub const DEFAULT_ICON_BASE: &str = "https://stardb.gg/api/static/StarRailResWebp/icon";

/// Badge presentation for an outcome: a text label and a CSS class hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

/// Total outcome-to-badge table. Unknown outcomes get a grey border and no
/// label; there is no undefined visual state.
pub fn badge(outcome: Outcome) -> Badge {
    match outcome {
        Outcome::Win => Badge {
            label: "Win",
            class: "win",
        },
        Outcome::Lose => Badge {
            label: "Lose",
            class: "lose",
        },
        Outcome::Guaranteed => Badge {
            label: "Guaranteed",
            class: "guaranteed",
        },
        Outcome::Unknown => Badge {
            label: "",
            class: "unknown",
        },
    }
}

/// Icon URL for a record: `<base>/light_cone/<id>.webp` at or above the id
/// threshold, `<base>/character/<id>.webp` below it. A record with no
/// parsable id falls into the character branch with id 0.
pub fn icon_url(base: &str, record: &PullRecord) -> String {
    let id = record.item_id.unwrap_or(0);
    if record.is_light_cone() {
        format!("{base}/light_cone/{id}.webp")
    } else {
        format!("{base}/character/{id}.webp")
    }
}

/// Hover tooltip text for a record.
pub fn tooltip(record: &PullRecord) -> String {
    let mut parts = vec![record.banner.clone(), record.date.clone()];
    let badge = badge(record.outcome);
    if !badge.label.is_empty() {
        parts.push(badge.label.to_string());
    }
    if let Some(pity) = record.pity {
        parts.push(format!("Pity {pity}"));
    }
    parts.join(" | ")
}

/// Fully derived view of one pull, ready for JSON serialization or
/// templating.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub date: String,
    pub banner: String,
    pub item_id: Option<u32>,
    pub character: String,
    pub outcome: Outcome,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    pub pity: Option<u32>,
    pub pity_color: Rgb,
    pub icon_url: String,
    pub tooltip: String,
}

impl TimelineEntry {
    /// Derive the display view of a record.
    pub fn derive(record: &PullRecord, icon_base: &str) -> Self {
        let badge = badge(record.outcome);
        Self {
            date: record.date.clone(),
            banner: record.banner.clone(),
            item_id: record.item_id,
            character: record.character.clone(),
            outcome: record.outcome,
            badge_label: badge.label,
            badge_class: badge.class,
            pity: record.pity,
            pity_color: pity_color(record.pity.unwrap_or(PITY_MIN)),
            icon_url: icon_url(icon_base, record),
            tooltip: tooltip(record),
        }
    }
}

/// Derive views for a whole timeline, preserving its newest-first order.
pub fn derive_entries(timeline: &Timeline, icon_base: &str) -> Vec<TimelineEntry> {
    timeline
        .records()
        .iter()
        .map(|record| TimelineEntry::derive(record, icon_base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(item_id: Option<u32>, outcome: Outcome, pity: Option<u32>) -> PullRecord {
        PullRecord {
            date: "2024-01-01".into(),
            banner: "BannerA".into(),
            item_id,
            character: "Item X".into(),
            outcome,
            pity,
        }
    }

    #[test]
    fn test_icon_url_branches() {
        let base = DEFAULT_ICON_BASE;
        let character = record(Some(19999), Outcome::Win, Some(1));
        let light_cone = record(Some(20000), Outcome::Win, Some(1));

        assert_eq!(
            icon_url(base, &character),
            format!("{base}/character/19999.webp")
        );
        assert_eq!(
            icon_url(base, &light_cone),
            format!("{base}/light_cone/20000.webp")
        );
    }

    #[test]
    fn test_missing_id_uses_character_branch() {
        let r = record(None, Outcome::Win, Some(1));
        assert_eq!(icon_url("base", &r), "base/character/0.webp");
    }

    #[test]
    fn test_badge_table_is_total() {
        assert_eq!(badge(Outcome::Win).label, "Win");
        assert_eq!(badge(Outcome::Lose).label, "Lose");
        assert_eq!(badge(Outcome::Guaranteed).label, "Guaranteed");

        let unknown = badge(Outcome::Unknown);
        assert_eq!(unknown.label, "");
        assert_eq!(unknown.class, "unknown");
    }

    #[test]
    fn test_tooltip_skips_empty_parts() {
        let full = record(Some(20010), Outcome::Win, Some(73));
        assert_eq!(tooltip(&full), "BannerA | 2024-01-01 | Win | Pity 73");

        let sparse = record(Some(20010), Outcome::Unknown, None);
        assert_eq!(tooltip(&sparse), "BannerA | 2024-01-01");
    }

    #[test]
    fn test_derive_worked_example() {
        let entry = TimelineEntry::derive(
            &record(Some(20010), Outcome::Win, Some(73)),
            DEFAULT_ICON_BASE,
        );
        assert_eq!(entry.badge_label, "Win");
        assert!(entry.icon_url.ends_with("/light_cone/20010.webp"));
        assert_eq!(entry.pity_color, Rgb::new(239, 158, 110));
    }

    #[test]
    fn test_missing_pity_colors_as_floor() {
        let entry = TimelineEntry::derive(&record(Some(1), Outcome::Win, None), "base");
        assert_eq!(entry.pity_color.to_hex(), "#57bb8a");
    }
}
