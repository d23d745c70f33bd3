//! Stats provider boundary
//!
//! The record store pulls player identity and season totals from an external
//! stats service. Everything behind this trait is treated as unreliable I/O:
//! callers turn a `ProviderError` into a local failure result.
//!
//! - `types`: wire records decoded from provider result sets
//! - `http`: client for the stats.nba.com endpoints
//! - `memory`: in-process provider for offline use and tests

pub mod http;
pub mod memory;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use crate::cli::types::PlayerId;

pub use http::{NbaStatsClient, ProviderConfig};
pub use memory::MemoryProvider;
pub use types::{PlayerListing, PlayerSummary, SeasonTotals};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Result set {name} missing from provider response")]
    MissingResultSet { name: String },

    #[error("Could not decode result set {set}: {source}")]
    Decode {
        set: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No summary returned for player {0}")]
    NoSummary(PlayerId),

    #[error("Stats provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of player identity and career totals.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Exact (case-insensitive) first/last name lookup across all players,
    /// active or not.
    async fn player_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Option<PlayerListing>, ProviderError>;

    /// Regular-season totals, one row per team per season, including the
    /// provider's multi-team aggregate rows.
    async fn career_totals(&self, id: PlayerId) -> Result<Vec<SeasonTotals>, ProviderError>;

    /// Identity and roster attributes (jersey, position, current team).
    async fn player_summary(&self, id: PlayerId) -> Result<PlayerSummary, ProviderError>;
}
