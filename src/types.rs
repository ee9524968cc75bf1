use crate::constants::{
    DAILY_DOUBLE_SENTINEL, DOUBLE_JEOPARDY_ROUND, DOUBLE_JEOPARDY_VALUES, FINAL_JEOPARDY_ROUND,
    JEOPARDY_ROUND, JEOPARDY_VALUES, UNREVEALED_SENTINEL,
};
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three fixed game segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundName {
    #[serde(rename = "Jeopardy!")]
    Jeopardy,
    #[serde(rename = "Double Jeopardy!")]
    DoubleJeopardy,
    #[serde(rename = "Final Jeopardy!")]
    FinalJeopardy,
}

impl RoundName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundName::Jeopardy => JEOPARDY_ROUND,
            RoundName::DoubleJeopardy => DOUBLE_JEOPARDY_ROUND,
            RoundName::FinalJeopardy => FINAL_JEOPARDY_ROUND,
        }
    }

    /// Board values for the round in ascending order. Final Jeopardy! has none.
    pub fn canonical_values(&self) -> Option<&'static [u32; 5]> {
        match self {
            RoundName::Jeopardy => Some(&JEOPARDY_VALUES),
            RoundName::DoubleJeopardy => Some(&DOUBLE_JEOPARDY_VALUES),
            RoundName::FinalJeopardy => None,
        }
    }
}

impl fmt::Display for RoundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point value of a board clue as published in the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawValueRepr")]
pub enum ClueValue {
    Known(u32),
    DailyDouble,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValueRepr {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl TryFrom<RawValueRepr> for ClueValue {
    type Error = String;

    fn try_from(repr: RawValueRepr) -> Result<Self, Self::Error> {
        match repr {
            RawValueRepr::Integer(n) => u32::try_from(n)
                .map(ClueValue::Known)
                .map_err(|_| format!("clue value {n} out of range")),
            RawValueRepr::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
                Ok(ClueValue::Known(f as u32))
            }
            RawValueRepr::Float(f) => Err(format!("clue value {f} is not a whole amount")),
            RawValueRepr::Text(s) => {
                let trimmed = s.trim();
                if trimmed.eq_ignore_ascii_case(DAILY_DOUBLE_SENTINEL) {
                    return Ok(ClueValue::DailyDouble);
                }
                let cleaned = trimmed.trim_start_matches('$').replace(',', "");
                cleaned
                    .parse::<u32>()
                    .map(ClueValue::Known)
                    .map_err(|_| format!("unrecognised clue value '{s}'"))
            }
        }
    }
}

/// Clue text, which the archive marks as unrevealed when the clue never aired
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ClueText {
    Revealed(String),
    #[default]
    Unrevealed,
}

impl From<Option<String>> for ClueText {
    fn from(text: Option<String>) -> Self {
        match text {
            Some(t) if t.trim() != UNREVEALED_SENTINEL => ClueText::Revealed(t),
            _ => ClueText::Unrevealed,
        }
    }
}

/// One clue of a Jeopardy! or Double Jeopardy! board as fetched
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawClue {
    pub category: String,
    #[serde(default)]
    pub value: Option<ClueValue>,
    #[serde(default, alias = "question")]
    pub clue: ClueText,
    #[serde(default)]
    pub answer: String,
    /// Position in which the clue was picked on air; carried but unused
    #[serde(default)]
    pub order: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFinalClue {
    pub category: String,
    #[serde(default, alias = "question")]
    pub clue: String,
    #[serde(default)]
    pub answer: String,
}

/// Per-show payload returned by the clue source
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawShow {
    #[serde(rename = "jeopardy", default)]
    pub jeopardy: Vec<RawClue>,
    #[serde(rename = "double jeopardy", default)]
    pub double_jeopardy: Vec<RawClue>,
    #[serde(rename = "final jeopardy")]
    pub final_jeopardy: RawFinalClue,
}

/// Clue in the converted output schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedClue {
    pub category: String,
    pub air_date: String,
    pub question: String,
    pub value: Option<String>,
    pub answer: String,
    pub round: RoundName,
    pub show_number: String,
}

/// Category name to clues, in first-encounter order
pub type CategoryMap = IndexMap<String, Vec<NormalizedClue>>;

/// Round to categories for one show
pub type ShowRecord = IndexMap<RoundName, CategoryMap>;

/// Show number to show record for a whole season
pub type SeasonOutput = IndexMap<String, ShowRecord>;

/// A show found on the season listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowListing {
    pub show_number: u32,
    pub air_date: NaiveDate,
}

impl ShowListing {
    pub fn new(show_number: u32, air_date: NaiveDate) -> Self {
        Self {
            show_number,
            air_date,
        }
    }

    pub fn show_id(&self) -> String {
        self.show_number.to_string()
    }

    pub fn year(&self) -> i32 {
        self.air_date.year()
    }

    pub fn month(&self) -> u32 {
        self.air_date.month()
    }

    pub fn day(&self) -> u32 {
        self.air_date.day()
    }

    /// ISO `YYYY-MM-DD` air date used in converted clues
    pub fn iso_air_date(&self) -> String {
        self.air_date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_value_accepts_archive_shapes() {
        let values: Vec<ClueValue> =
            serde_json::from_str(r#"[400, "800", "$1,200", 1600.0, " daily double "]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ClueValue::Known(400),
                ClueValue::Known(800),
                ClueValue::Known(1200),
                ClueValue::Known(1600),
                ClueValue::DailyDouble,
            ]
        );
    }

    #[test]
    fn test_clue_value_rejects_garbage() {
        assert!(serde_json::from_str::<ClueValue>(r#""a lot""#).is_err());
        assert!(serde_json::from_str::<ClueValue>("-200").is_err());
        assert!(serde_json::from_str::<ClueValue>("200.5").is_err());
    }

    #[test]
    fn test_clue_text_unrevealed_variants() {
        let clue: RawClue = serde_json::from_str(
            r#"{"category": "POTENT POTABLES", "value": 200, "clue": "Unrevealed", "answer": ""}"#,
        )
        .unwrap();
        assert_eq!(clue.clue, ClueText::Unrevealed);

        let clue: RawClue =
            serde_json::from_str(r#"{"category": "POTENT POTABLES", "value": 200, "clue": null}"#)
                .unwrap();
        assert_eq!(clue.clue, ClueText::Unrevealed);
    }

    #[test]
    fn test_round_name_serializes_as_literal() {
        let json = serde_json::to_string(&RoundName::DoubleJeopardy).unwrap();
        assert_eq!(json, r#""Double Jeopardy!""#);
        assert_eq!(RoundName::FinalJeopardy.to_string(), "Final Jeopardy!");
    }

    #[test]
    fn test_show_listing_dates() {
        let listing = ShowListing::new(8045, NaiveDate::from_ymd_opt(2019, 9, 9).unwrap());
        assert_eq!(listing.show_id(), "8045");
        assert_eq!(listing.iso_air_date(), "2019-09-09");
        assert_eq!((listing.year(), listing.month(), listing.day()), (2019, 9, 9));
    }
}
