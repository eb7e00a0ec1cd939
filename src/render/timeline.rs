//! Timeline Rendering
//!
//! The pull-history grid with its pity badges and tooltips, and the "Latest
//! 5-star Pull" summary card.

use super::escape;
use crate::timeline::{derive_entries, Timeline, TimelineEntry};

/// The "Latest 5-star Pull" card for the home page. Renders nothing for an
/// empty timeline.
pub fn latest_pull_card(timeline: &Timeline, icon_base: &str) -> String {
    let Some(record) = timeline.latest() else {
        return String::new();
    };
    let entry = TimelineEntry::derive(record, icon_base);

    format!(
        r#"<div class="card">
  <div class="avatar"><img src="{icon}" alt=""></div>
  <h2>Latest HSR 5&#9733; Pull</h2>
  <p class="latest-name">{character}</p>
  <div class="latest-meta">
    <p>Pity: {pity}</p>
    <p>Date: {date}</p>
  </div>
</div>"#,
        icon = escape(&entry.icon_url),
        character = escape(&entry.character),
        pity = entry.pity.map_or(String::new(), |p| p.to_string()),
        date = escape(&entry.date),
    )
}

/// The full pull-history grid, newest first. Each cell carries an outcome
/// border class, a pity badge colored by the pity scale, and a tooltip.
pub fn timeline_grid(timeline: &Timeline, icon_base: &str) -> String {
    let cells: Vec<String> = derive_entries(timeline, icon_base)
        .iter()
        .map(grid_cell)
        .collect();
    cells.join("\n")
}

fn grid_cell(entry: &TimelineEntry) -> String {
    let label = if entry.badge_label.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="outcome-label {class}">{label}</div>"#,
            class = entry.badge_class,
            label = entry.badge_label,
        )
    };

    format!(
        r#"<div class="pull-cell {class}" title="{tooltip}">
  <img src="{icon}" alt="{character}">
  <div class="pity-badge" style="background: {color}">{pity}</div>
  {label}
</div>"#,
        class = entry.badge_class,
        tooltip = escape(&entry.tooltip),
        icon = escape(&entry.icon_url),
        character = escape(&entry.character),
        color = entry.pity_color,
        pity = entry.pity.map_or(String::new(), |p| p.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::parse_sheet;

    const SHEET: &str = "Date,Banner,ID,Character,Result,Pity
2024-01-01,BannerA,20010,Item X,W,73
2024-03-20,BannerC,1308,Acheron,X,81";

    #[test]
    fn test_latest_pull_card_uses_newest_record() {
        let timeline = parse_sheet(SHEET).unwrap();
        let html = latest_pull_card(&timeline, "base");
        assert!(html.contains("Acheron"));
        assert!(html.contains("base/character/1308.webp"));
        assert!(html.contains("Pity: 81"));
    }

    #[test]
    fn test_latest_pull_card_empty_timeline() {
        let timeline = parse_sheet("").unwrap();
        assert_eq!(latest_pull_card(&timeline, "base"), "");
    }

    #[test]
    fn test_grid_color_codes_and_labels() {
        let timeline = parse_sheet(SHEET).unwrap();
        let html = timeline_grid(&timeline, "base");

        // Win cell gets a label; the unknown outcome gets border class only.
        assert!(html.contains(r#"pull-cell win"#));
        assert!(html.contains(">Win</div>"));
        assert!(html.contains(r#"pull-cell unknown"#));
        assert!(!html.contains(">X</div>"));

        // pity 73 sits on the gold-to-red segment
        assert!(html.contains("background: rgb(239, 158, 110)"));
    }

    #[test]
    fn test_grid_tooltips() {
        let timeline = parse_sheet(SHEET).unwrap();
        let html = timeline_grid(&timeline, "base");
        assert!(html.contains(r#"title="BannerA | 2024-01-01 | Win | Pity 73""#));
    }
}
