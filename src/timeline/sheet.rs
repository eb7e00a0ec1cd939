//! Sheet Parsing
//!
//! Parses the pull-history CSV sheet into a [`Timeline`].
//!
//! The sheet format is a header line followed by one pull per line, six
//! comma-separated fields: date, banner, item id, character, outcome code,
//! pity. Quoting is deliberately disabled: the sheet has never quoted fields,
//! and a field containing a literal comma garbles that row rather than
//! failing the whole load.

use csv::ReaderBuilder;
use thiserror::Error;

use super::record::{Outcome, PullRecord};

/// Errors from parsing a whole sheet. Individual malformed rows are not
/// errors; they parse permissively.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Parsed pull history in display order (newest first).
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    records: Vec<PullRecord>,
}

impl Timeline {
    /// All records, newest first.
    pub fn records(&self) -> &[PullRecord] {
        &self.records
    }

    /// The most recent pull, used for the summary card. An empty timeline is
    /// a valid state, not an error.
    pub fn latest(&self) -> Option<&PullRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a sheet body into a [`Timeline`].
///
/// The header line is always discarded. Every data line produces exactly one
/// record: fields are trimmed, missing fields read as empty, and non-numeric
/// id/pity values are kept as `None` instead of dropping the row. The parsed
/// list is reversed exactly once so file order (chronological ascending)
/// becomes display order (newest first); ties keep their original relative
/// position.
pub fn parse_sheet(body: &str) -> Result<Timeline, SheetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(body.trim().as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

        records.push(PullRecord {
            date: field(0),
            banner: field(1),
            item_id: field(2).parse().ok(),
            character: field(3),
            outcome: Outcome::from_code(field(4).as_str()),
            pity: field(5).parse().ok(),
        });
    }

    records.reverse();
    Ok(Timeline { records })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "Date,Banner,ID,Character,Result,Pity
2024-01-01,BannerA,20010,Item X,W,73
2024-02-15,BannerB,1212,Jingliu,L,44
2024-03-20,BannerC,1308,Acheron,G,81";

    #[test]
    fn test_record_count_matches_data_lines() {
        let timeline = parse_sheet(SHEET).unwrap();
        assert_eq!(timeline.len(), 3);
    }

    #[test]
    fn test_newest_first_ordering() {
        let timeline = parse_sheet(SHEET).unwrap();
        let dates: Vec<&str> = timeline
            .records()
            .iter()
            .map(|r| r.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2024-03-20", "2024-02-15", "2024-01-01"]);
    }

    #[test]
    fn test_reversal_is_involution() {
        let timeline = parse_sheet(SHEET).unwrap();
        let mut twice: Vec<PullRecord> = timeline.records().to_vec();
        twice.reverse();
        let file_order_dates: Vec<&str> = twice.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(
            file_order_dates,
            vec!["2024-01-01", "2024-02-15", "2024-03-20"]
        );
    }

    #[test]
    fn test_worked_example_row() {
        let timeline = parse_sheet(SHEET).unwrap();
        let record = timeline.records().last().unwrap();
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.banner, "BannerA");
        assert_eq!(record.item_id, Some(20010));
        assert_eq!(record.character, "Item X");
        assert_eq!(record.outcome, Outcome::Win);
        assert_eq!(record.pity, Some(73));
        assert!(record.is_light_cone());
    }

    #[test]
    fn test_latest_is_last_file_row() {
        let timeline = parse_sheet(SHEET).unwrap();
        assert_eq!(timeline.latest().unwrap().character, "Acheron");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let sheet = "Date,Banner,ID,Character,Result,Pity\n 2024-01-01 , BannerA , 1001 , Someone , W , 5 ";
        let timeline = parse_sheet(sheet).unwrap();
        let record = timeline.latest().unwrap();
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.banner, "BannerA");
        assert_eq!(record.item_id, Some(1001));
        assert_eq!(record.pity, Some(5));
    }

    #[test]
    fn test_non_numeric_fields_keep_the_row() {
        let sheet = "Date,Banner,ID,Character,Result,Pity\n2024-01-01,BannerA,oops,Someone,W,bad";
        let timeline = parse_sheet(sheet).unwrap();
        assert_eq!(timeline.len(), 1);
        let record = timeline.latest().unwrap();
        assert_eq!(record.item_id, None);
        assert_eq!(record.pity, None);
    }

    #[test]
    fn test_short_row_keeps_the_row() {
        let sheet = "Date,Banner,ID,Character,Result,Pity\n2024-01-01,BannerA,1001";
        let timeline = parse_sheet(sheet).unwrap();
        assert_eq!(timeline.len(), 1);
        let record = timeline.latest().unwrap();
        assert_eq!(record.character, "");
        assert_eq!(record.outcome, Outcome::Unknown);
        assert_eq!(record.pity, None);
    }

    #[test]
    fn test_empty_sheet_is_valid() {
        let timeline = parse_sheet("Date,Banner,ID,Character,Result,Pity").unwrap();
        assert!(timeline.is_empty());
        assert!(timeline.latest().is_none());

        let timeline = parse_sheet("").unwrap();
        assert!(timeline.is_empty());
    }
}
