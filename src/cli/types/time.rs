//! Season type for NBA stats provider requests.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for an NBA season, keyed by the year it starts.
///
/// Displays in the provider's label format: `Season::new(2024)` is `"2024-25"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Provider label, e.g. `2024-25`.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0, self.end_suffix())
    }

    /// Last two digits of the year the season ends in.
    fn end_suffix(&self) -> u16 {
        (self.0 % 100 + 1) % 100
    }
}

/// First season of the league's stats records.
pub const FIRST_SEASON: u16 = 1946;
/// Last start year with a four-digit label.
pub const LAST_SEASON: u16 = 9998;

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Season {
    type Err = NbaError;

    /// Accepts either a start year (`2024`) or a full label (`2024-25`).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            season: s.to_string(),
        };
        let s = s.trim();

        let season = match s.split_once('-') {
            None => Self(s.parse().map_err(|_| invalid())?),
            Some((start, end)) => {
                let season = Self(start.parse().map_err(|_| invalid())?);
                let end: u16 = end.parse().map_err(|_| invalid())?;
                if end.to_string().len() > 2 || season.end_suffix() != end {
                    return Err(invalid());
                }
                season
            }
        };

        if !(FIRST_SEASON..=LAST_SEASON).contains(&season.0) {
            return Err(invalid());
        }
        Ok(season)
    }
}
