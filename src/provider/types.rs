//! Wire types for the stats provider.
//!
//! Every endpoint answers with one or more tabular result sets: a list of
//! column headers plus rows of positional values. Rows are decoded by header
//! name into the named records below, so a column reorder upstream cannot
//! silently shift a value into the wrong field.

use crate::cli::types::{PlayerId, TeamId};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::ProviderError;


/// Top-level envelope shared by every stats endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Find a result set by name.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet, ProviderError> {
        self.result_sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| ProviderError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// One named table inside a provider response
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Decode every row into `T`, keying cells by their column header.
    ///
    /// Columns that `T` does not name are ignored.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>, ProviderError> {
        self.row_set
            .iter()
            .map(|row| {
                let object: Map<String, Value> = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect();
                serde_json::from_value(Value::Object(object)).map_err(|source| {
                    ProviderError::Decode {
                        set: self.name.clone(),
                        source,
                    }
                })
            })
            .collect()
    }
}

/// Roster status arrives as 0/1, occasionally as a string or bool.
fn de_roster_status<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "active"),
        _ => false,
    })
}

/// Older seasons have null rebound/assist totals; count them as zero.
fn de_null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Jersey numbers come back as strings, numbers, or empty/null.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// A row of `commonallplayers`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerListing {
    #[serde(rename = "PERSON_ID")]
    pub id: PlayerId,
    /// "Last, First"
    #[serde(rename = "DISPLAY_LAST_COMMA_FIRST")]
    pub last_comma_first: String,
    #[serde(rename = "DISPLAY_FIRST_LAST")]
    pub display_name: String,
    #[serde(rename = "ROSTERSTATUS", deserialize_with = "de_roster_status")]
    pub active: bool,
    #[serde(rename = "TEAM_ID")]
    pub team_id: TeamId,
}

impl PlayerListing {
    /// Case-insensitive match against a first/last name pair.
    pub fn matches_name(&self, first: &str, last: &str) -> bool {
        let wanted = format!("{}, {}", last.trim(), first.trim()).to_lowercase();
        self.last_comma_first.trim().to_lowercase() == wanted
    }
}

/// The `CommonPlayerInfo` row of `commonplayerinfo`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSummary {
    #[serde(rename = "PERSON_ID")]
    pub id: PlayerId,
    #[serde(rename = "DISPLAY_FIRST_LAST")]
    pub display_name: String,
    #[serde(rename = "JERSEY", default, deserialize_with = "de_opt_text")]
    pub jersey: Option<String>,
    #[serde(rename = "POSITION", default, deserialize_with = "de_opt_text")]
    pub position: Option<String>,
    #[serde(rename = "TEAM_ID")]
    pub team_id: TeamId,
}

/// A row of `SeasonTotalsRegularSeason` from `playercareerstats`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeasonTotals {
    #[serde(rename = "PLAYER_ID")]
    pub player_id: PlayerId,
    #[serde(rename = "SEASON_ID")]
    pub season: String,
    #[serde(rename = "TEAM_ID")]
    pub team_id: TeamId,
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "PTS", deserialize_with = "de_null_as_zero")]
    pub points: f64,
    #[serde(rename = "REB", deserialize_with = "de_null_as_zero")]
    pub rebounds: f64,
    #[serde(rename = "AST", deserialize_with = "de_null_as_zero")]
    pub assists: f64,
}

impl SeasonTotals {
    pub fn new(
        player_id: PlayerId,
        season: &str,
        team_id: TeamId,
        games_played: u32,
        points: f64,
        rebounds: f64,
        assists: f64,
    ) -> Self {
        Self {
            player_id,
            season: season.to_string(),
            team_id,
            games_played,
            points,
            rebounds,
            assists,
        }
    }

    /// True for the "TOT" row the provider adds when a player was traded mid-season.
    pub fn is_aggregate(&self) -> bool {
        self.team_id.is_aggregate()
    }
}
