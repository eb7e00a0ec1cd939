//! Profile Document Models
//!
//! serde models of the stats JSON document. Each game's object is optional at
//! the top level (an absent game skips that whole section); once present, the
//! core identity and stat fields are required, and only the enumerated
//! "today's activity" counters default to zero when missing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding the profile document.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Malformed profile document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The whole stats document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatsDocument {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub hsr: Option<HsrProfile>,
    #[serde(default)]
    pub genshin: Option<GenshinProfile>,
}

impl StatsDocument {
    pub fn parse(body: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Honkai: Star Rail profile block.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HsrProfile {
    pub nickname: String,
    pub level: u32,
    pub avatar_url: String,
    pub achievements: u32,
    pub active_days: u32,
    pub avatar_count: u32,
    pub chest_count: u32,
    #[serde(default)]
    pub five_star_characters: Vec<String>,
    #[serde(default)]
    pub stamina: Option<u32>,
    #[serde(default)]
    pub current_train_score: Option<u32>,
    #[serde(default)]
    pub memory_of_chaos: Option<MemoryOfChaos>,
}

impl HsrProfile {
    /// Memory of Chaos star total for the home card; an absent or empty MoC
    /// block counts as zero.
    pub fn moc_stars(&self) -> u32 {
        self.memory_of_chaos
            .as_ref()
            .map(|moc| moc.total_stars)
            .unwrap_or(0)
    }
}

/// Genshin Impact profile block.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenshinProfile {
    pub nickname: String,
    pub level: u32,
    pub avatar_url: String,
    pub achievements: u32,
    pub active_days: u32,
    pub avatar_count: u32,
    pub oculus: u32,
    pub chest_count: u32,
    #[serde(default)]
    pub five_star_characters: Vec<String>,
    #[serde(default)]
    pub resin: Option<u32>,
    #[serde(default)]
    pub daily_task: Option<u32>,
}

/// Memory of Chaos challenge summary. The upstream fetcher writes an empty
/// object when the challenge fetch failed, so every field tolerates absence.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemoryOfChaos {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub total_stars: u32,
    #[serde(default)]
    pub floor_data: Option<FloorData>,
}

/// One cleared floor with its two half-team nodes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FloorData {
    pub floor: String,
    pub cycles: u32,
    pub first_half: Vec<MocAvatar>,
    pub second_half: Vec<MocAvatar>,
}

/// A character reference inside a Memory of Chaos node.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MocAvatar {
    pub id: u32,
    pub level: u32,
    /// Upgrade tier, shown as an `E<n>` badge
    pub eidolon: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "last_updated": "2024-06-01T00:00:00",
        "hsr": {
            "nickname": "Trailblazer",
            "level": 70,
            "avatar_url": "https://example.com/avatar.png",
            "achievements": 500,
            "active_days": 365,
            "avatar_count": 40,
            "chest_count": 200,
            "stamina": 120,
            "current_train_score": 500,
            "memory_of_chaos": {
                "season": "Season 1",
                "total_stars": 30,
                "floor_data": {
                    "floor": "Memory of Chaos: Stage 12",
                    "cycles": 5,
                    "first_half": [{"id": 1212, "level": 80, "eidolon": 0}],
                    "second_half": [{"id": 1308, "level": 80, "eidolon": 2}]
                }
            }
        }
    }"#;

    #[test]
    fn test_parse_full_document() {
        let doc = StatsDocument::parse(DOCUMENT).unwrap();
        let hsr = doc.hsr.unwrap();
        assert_eq!(hsr.nickname, "Trailblazer");
        assert_eq!(hsr.moc_stars(), 30);

        let floor = hsr.memory_of_chaos.unwrap().floor_data.unwrap();
        assert_eq!(floor.cycles, 5);
        assert_eq!(floor.second_half[0].eidolon, 2);

        assert!(doc.genshin.is_none());
    }

    #[test]
    fn test_absent_games_parse_to_none() {
        let doc = StatsDocument::parse("{}").unwrap();
        assert!(doc.hsr.is_none());
        assert!(doc.genshin.is_none());
        assert!(doc.last_updated.is_none());
    }

    #[test]
    fn test_activity_counters_default_to_absent() {
        let doc = StatsDocument::parse(
            r#"{"genshin": {
                "nickname": "Aether", "level": 60,
                "avatar_url": "u", "achievements": 900, "active_days": 1000,
                "avatar_count": 50, "oculus": 2000, "chest_count": 3000
            }}"#,
        )
        .unwrap();

        let genshin = doc.genshin.unwrap();
        assert_eq!(genshin.resin, None);
        assert_eq!(genshin.daily_task, None);
    }

    #[test]
    fn test_empty_moc_block_parses() {
        let doc = StatsDocument::parse(
            r#"{"hsr": {
                "nickname": "T", "level": 1, "avatar_url": "u",
                "achievements": 0, "active_days": 0, "avatar_count": 0,
                "chest_count": 0, "memory_of_chaos": {}
            }}"#,
        )
        .unwrap();

        let hsr = doc.hsr.unwrap();
        assert_eq!(hsr.moc_stars(), 0);
        assert!(hsr.memory_of_chaos.unwrap().floor_data.is_none());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(StatsDocument::parse("not json").is_err());
    }
}
