use serde::{Deserialize, Serialize};

use crate::core::error::AwardError;

/// Earliest year accepted from a dataset source
pub const MIN_YEAR: i32 = 0;
/// Latest year accepted from a dataset source
pub const MAX_YEAR: i32 = 9999;

/// A single nomination from the awards dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    /// Ceremony year
    pub year: i32,
    /// Movie title
    pub title: String,
    /// Studios behind the movie
    pub studios: String,
    /// Producer credit, kept as one opaque grouping key even when it names several people
    pub producers: String,
    /// Whether the movie won the award that year
    pub winner: bool,
}

/// An award record together with its storage id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredAward {
    pub id: i64,
    #[serde(flatten)]
    pub record: AwardRecord,
}

impl AwardRecord {
    pub fn new(year: i32, title: &str, studios: &str, producers: &str, winner: bool) -> Self {
        Self {
            year,
            title: title.to_string(),
            studios: studios.to_string(),
            producers: producers.to_string(),
            winner,
        }
    }

    /// Build a record from raw text fields, rejecting anything that cannot be parsed
    pub fn from_raw(
        year: &str,
        title: &str,
        studios: &str,
        producers: &str,
        winner: &str,
    ) -> Result<Self, AwardError> {
        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|_| AwardError::malformed(format!("year '{}' is not an integer", year.trim())))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(AwardError::malformed(format!(
                "year {} is outside {}..={}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(AwardError::malformed("title is empty"));
        }

        Ok(Self {
            year,
            title: title.to_string(),
            studios: studios.trim().to_string(),
            producers: producers.trim().to_string(),
            winner: parse_winner(winner)?,
        })
    }
}

/// Parse the raw `winner` column into a boolean.
///
/// Nominees are left blank in the published dataset, so the empty string reads as `false`.
/// Any value outside the known vocabulary is an error.
pub fn parse_winner(raw: &str) -> Result<bool, AwardError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" | "" => Ok(false),
        other => Err(AwardError::malformed(format!("unrecognized winner value '{}'", other))),
    }
}
