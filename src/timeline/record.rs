//! Pull Record Types
//!
//! Typed representation of one row of the pull-history sheet.

use serde::Serialize;

/// Item ids at or above this value are light cones; everything below is a
/// character. The sheet encodes both item kinds in one id column.
pub const LIGHT_CONE_ID_FLOOR: u32 = 20000;

/// Outcome of a limited-banner pull, parsed from the sheet's one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Won the 50/50 (`W`)
    Win,
    /// Lost the 50/50 (`L`)
    Lose,
    /// Guaranteed pull, no coin flip (`G`)
    Guaranteed,
    /// Any other code; rendered without a label
    Unknown,
}

impl Outcome {
    /// Parse the sheet's outcome code. Unrecognized codes are accepted and
    /// map to [`Outcome::Unknown`] rather than failing the row.
    pub fn from_code(code: &str) -> Self {
        match code {
            "W" => Outcome::Win,
            "L" => Outcome::Lose,
            "G" => Outcome::Guaranteed,
            _ => Outcome::Unknown,
        }
    }
}

/// One row of the pull-history sheet.
///
/// Records are immutable once parsed and carry no identity beyond their
/// position in the timeline. The numeric columns are `Option` because the
/// sheet is not validated: a non-numeric id or pity keeps the row and simply
/// leaves the field unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRecord {
    /// Calendar date string, display-only (no timezone handling)
    pub date: String,
    /// Free-text banner label
    pub banner: String,
    /// Item id, or `None` when the sheet carried a non-numeric value
    pub item_id: Option<u32>,
    /// Display name of the pulled item
    pub character: String,
    /// Parsed outcome code
    pub outcome: Outcome,
    /// Pity counter at the time of the pull, or `None` when non-numeric
    pub pity: Option<u32>,
}

impl PullRecord {
    /// Whether this pull is a light cone (equipment) rather than a character.
    ///
    /// A missing item id takes the character branch, matching how the source
    /// sheet's garbled rows have always rendered.
    pub fn is_light_cone(&self) -> bool {
        self.item_id.map_or(false, |id| id >= LIGHT_CONE_ID_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::from_code("W"), Outcome::Win);
        assert_eq!(Outcome::from_code("L"), Outcome::Lose);
        assert_eq!(Outcome::from_code("G"), Outcome::Guaranteed);
    }

    #[test]
    fn test_unrecognized_outcome_is_unknown() {
        assert_eq!(Outcome::from_code("X"), Outcome::Unknown);
        assert_eq!(Outcome::from_code(""), Outcome::Unknown);
        assert_eq!(Outcome::from_code("w"), Outcome::Unknown);
    }

    #[test]
    fn test_light_cone_boundary() {
        let mut record = PullRecord {
            date: "2024-01-01".into(),
            banner: "BannerA".into(),
            item_id: Some(19999),
            character: "Someone".into(),
            outcome: Outcome::Win,
            pity: Some(10),
        };
        assert!(!record.is_light_cone());

        record.item_id = Some(20000);
        assert!(record.is_light_cone());

        record.item_id = None;
        assert!(!record.is_light_cone());
    }
}
