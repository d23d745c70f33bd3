//! Data models for the storage layer

use crate::cli::types::{PlayerId, TeamId, UserId};
use serde::{Deserialize, Serialize};

/// Result of a record store operation.
///
/// Data-access and provider failures are logged where they happen and never
/// cross the store boundary as raw errors; callers see one of these three
/// cases and must handle each.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
    /// The operation failed; any transaction was rolled back.
    Failed,
}

impl<T> Outcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Found(value) => Outcome::Found(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Failed => Outcome::Failed,
        }
    }
}

/// Team information stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub city: String,
    pub nickname: String,
    pub abbreviation: String,
}

impl TeamRecord {
    /// Display name, e.g. "Los Angeles Lakers".
    pub fn name(&self) -> String {
        format!("{} {}", self.city, self.nickname)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub name: String,
}

/// A team with its stored roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub team: TeamRecord,
    pub roster: Vec<RosterEntry>,
}

/// Player information stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    /// None when the player's team is not a current franchise (or a free agent).
    pub team_name: Option<String>,
    pub position: Option<String>,
    pub jersey: Option<String>,
}

/// One player's regular-season totals with one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStat {
    pub season: String,
    pub team_id: TeamId,
    pub team_abbreviation: Option<String>,
    pub games_played: u32,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

/// Per-game averages rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerGame {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

/// Per-game averages for one team in one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeasonAverage {
    pub season: String,
    pub team_id: TeamId,
    pub team_abbreviation: Option<String>,
    pub games_played: u32,
    pub per_game: PerGame,
}

/// A player's base record plus derived career and per-team-season averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player: PlayerRecord,
    pub career: PerGame,
    pub career_games: u32,
    pub by_team_season: Vec<TeamSeasonAverage>,
}

/// Admin account (the credential never leaves the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: UserId,
    pub username: String,
}
