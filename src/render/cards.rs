//! Profile Cards
//!
//! Home summary cards, per-game profile cards, "Today's Status" mini-stat
//! panels, and the Memory of Chaos mini-grid. Markup mirrors the original
//! page's card templates.

use super::escape;
use crate::profile::{DailyStatus, GenshinProfile, HsrProfile, MocAvatar};

/// Home page summary card for HSR.
pub fn home_hsr(profile: &HsrProfile) -> String {
    format!(
        r#"<div class="card">
  <h2>Honkai: Star Rail</h2>
  <div class="nickname">{nickname}</div>
  <div>Level {level}</div>
  <div>&#11088; MoC Stars: {stars}</div>
  <div>Trailblaze Power: {stamina}/300</div>
</div>"#,
        nickname = escape(&profile.nickname),
        level = profile.level,
        stars = profile.moc_stars(),
        stamina = profile.stamina.unwrap_or(0),
    )
}

/// Home page summary card for Genshin.
pub fn home_genshin(profile: &GenshinProfile) -> String {
    format!(
        r#"<div class="card">
  <h2>Genshin Impact</h2>
  <div class="nickname">{nickname}</div>
  <div>AR {level}</div>
  <div>Achievements: {achievements}</div>
</div>"#,
        nickname = escape(&profile.nickname),
        level = profile.level,
        achievements = profile.achievements,
    )
}

/// Full HSR profile card with the stat strip.
pub fn hsr_profile(profile: &HsrProfile) -> String {
    format!(
        r#"<div class="card">
  <div class="avatar"><img src="{avatar}" alt="avatar"></div>
  <div class="nickname">{nickname}</div>
  <div class="server-level">NA | Level {level}</div>
  <div class="stats">
    <div class="stat">Active Days<br><strong>{active_days}</strong></div>
    <div class="stat">Achievements<br><strong>{achievements}</strong></div>
    <div class="stat">Characters<br><strong>{avatar_count}</strong></div>
    <div class="stat">Chests<br><strong>{chest_count}</strong></div>
  </div>
</div>"#,
        avatar = escape(&profile.avatar_url),
        nickname = escape(&profile.nickname),
        level = profile.level,
        active_days = profile.active_days,
        achievements = profile.achievements,
        avatar_count = profile.avatar_count,
        chest_count = profile.chest_count,
    )
}

/// Full Genshin profile card with the stat strip.
pub fn genshin_profile(profile: &GenshinProfile) -> String {
    format!(
        r#"<div class="card">
  <div class="avatar"><img src="{avatar}" alt="avatar"></div>
  <div class="nickname">{nickname}</div>
  <div class="server-level">AR {level}</div>
  <div class="stats">
    <div class="stat">Achievements<br><strong>{achievements}</strong></div>
    <div class="stat">Active Days<br><strong>{active_days}</strong></div>
    <div class="stat">Characters<br><strong>{avatar_count}</strong></div>
    <div class="stat">Oculus<br><strong>{oculus}</strong></div>
    <div class="stat">Chests<br><strong>{chest_count}</strong></div>
  </div>
</div>"#,
        avatar = escape(&profile.avatar_url),
        nickname = escape(&profile.nickname),
        level = profile.level,
        achievements = profile.achievements,
        active_days = profile.active_days,
        avatar_count = profile.avatar_count,
        oculus = profile.oculus,
        chest_count = profile.chest_count,
    )
}

/// "Today's Status" mini-stat panel, shared by both games.
pub fn daily_status_card(status: &DailyStatus) -> String {
    format!(
        r#"<div class="mini-card">
  <h3>Today's Status</h3>
  <div class="line">{resource_label}: <strong>{resource}/{resource_cap}</strong></div>
  <div class="line">{task_label}: <strong>{tasks}/{task_cap}</strong></div>
  <div class="line">Logged In Today: <strong>{logged_in}</strong></div>
</div>"#,
        resource_label = status.resource_label,
        resource = status.resource,
        resource_cap = status.resource_cap,
        task_label = status.task_label,
        tasks = status.tasks,
        task_cap = status.task_cap,
        logged_in = if status.logged_in_today { "Yes" } else { "No" },
    )
}

/// Memory of Chaos mini-grid. Renders nothing when the profile carries no
/// MoC block or the block has no floor data.
pub fn moc_grid(profile: &HsrProfile, icon_base: &str) -> String {
    let Some(moc) = &profile.memory_of_chaos else {
        return String::new();
    };
    let Some(floor) = &moc.floor_data else {
        return String::new();
    };

    format!(
        r#"<div class="moc-card">
  <div class="moc-header">
    <div class="moc-floor">{floor}</div>
    <div class="moc-cycles">Cycles: {cycles} | &#11088; {stars}</div>
  </div>
  <div class="moc-node-row">
{node1}
{node2}
  </div>
</div>"#,
        floor = escape(&floor.floor),
        cycles = floor.cycles,
        stars = moc.total_stars,
        node1 = moc_node("Node 1", &floor.first_half, icon_base),
        node2 = moc_node("Node 2", &floor.second_half, icon_base),
    )
}

fn moc_node(title: &str, avatars: &[MocAvatar], icon_base: &str) -> String {
    let avatar_row: String = avatars
        .iter()
        .map(|avatar| {
            format!(
                r#"<div class="moc-avatar"><img src="{icon_base}/character/{id}.webp" alt=""><div class="eidolon-badge">E{eidolon}</div></div>"#,
                id = avatar.id,
                eidolon = avatar.eidolon,
            )
        })
        .collect();

    format!(
        r#"    <div class="moc-node">
      <div class="moc-node-title">{title}</div>
      <div class="moc-avatars">{avatar_row}</div>
    </div>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FloorData, MemoryOfChaos};

    fn hsr() -> HsrProfile {
        HsrProfile {
            nickname: "Trailblazer".into(),
            level: 70,
            avatar_url: "https://example.com/a.png".into(),
            achievements: 500,
            active_days: 365,
            avatar_count: 40,
            chest_count: 200,
            five_star_characters: Vec::new(),
            stamina: Some(120),
            current_train_score: Some(500),
            memory_of_chaos: Some(MemoryOfChaos {
                season: None,
                total_stars: 30,
                floor_data: Some(FloorData {
                    floor: "Stage 12".into(),
                    cycles: 5,
                    first_half: vec![MocAvatar {
                        id: 1212,
                        level: 80,
                        eidolon: 0,
                    }],
                    second_half: vec![MocAvatar {
                        id: 1308,
                        level: 80,
                        eidolon: 2,
                    }],
                }),
            }),
        }
    }

    #[test]
    fn test_home_card_uses_moc_stars_and_stamina() {
        let html = home_hsr(&hsr());
        assert!(html.contains("MoC Stars: 30"));
        assert!(html.contains("Trailblaze Power: 120/300"));
    }

    #[test]
    fn test_moc_grid_renders_both_nodes() {
        let html = moc_grid(&hsr(), "base");
        assert!(html.contains("Node 1"));
        assert!(html.contains("Node 2"));
        assert!(html.contains("base/character/1212.webp"));
        assert!(html.contains(">E2<"));
        assert!(html.contains("Cycles: 5"));
    }

    #[test]
    fn test_moc_grid_empty_without_floor_data() {
        let mut profile = hsr();
        profile.memory_of_chaos = None;
        assert_eq!(moc_grid(&profile, "base"), "");

        profile.memory_of_chaos = Some(MemoryOfChaos {
            season: None,
            total_stars: 0,
            floor_data: None,
        });
        assert_eq!(moc_grid(&profile, "base"), "");
    }

    #[test]
    fn test_nickname_is_escaped() {
        let mut profile = hsr();
        profile.nickname = "<script>".into();
        let html = hsr_profile(&profile);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_daily_status_card_lines() {
        let html = daily_status_card(&hsr().daily_status());
        assert!(html.contains("Trailblaze Power: <strong>120/300</strong>"));
        assert!(html.contains("Daily Training: <strong>500/500</strong>"));
        assert!(html.contains("Logged In Today: <strong>Yes</strong>"));
    }
}
