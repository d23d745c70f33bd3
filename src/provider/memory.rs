//! In-memory stats provider.
//!
//! Serves a fixed set of players without network access. Useful for offline
//! demos and for exercising the store and resolver deterministically.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{PlayerListing, PlayerSummary, ProviderError, SeasonTotals, StatsProvider};
use crate::cli::types::{PlayerId, TeamId};

#[derive(Debug, Clone)]
struct MemoryPlayer {
    listing: PlayerListing,
    summary: PlayerSummary,
    totals: Vec<SeasonTotals>,
}

#[derive(Debug, Default)]
struct MemoryState {
    players: BTreeMap<PlayerId, MemoryPlayer>,
    unavailable: bool,
}

/// Provider backed by an in-process player table
#[derive(Debug, Default)]
pub struct MemoryProvider {
    state: RwLock<MemoryState>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a player.
    pub fn insert(&self, listing: PlayerListing, summary: PlayerSummary, totals: Vec<SeasonTotals>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.players.insert(
            listing.id,
            MemoryPlayer {
                listing,
                summary,
                totals,
            },
        );
    }

    /// Add a player from a "First Last" display name, deriving the directory
    /// and summary rows.
    pub fn add_player(
        &self,
        id: PlayerId,
        display_name: &str,
        team_id: TeamId,
        active: bool,
        totals: Vec<SeasonTotals>,
    ) {
        let last_comma_first = match display_name.split_once(' ') {
            Some((first, last)) => format!("{last}, {first}"),
            None => display_name.to_string(),
        };
        let listing = PlayerListing {
            id,
            last_comma_first,
            display_name: display_name.to_string(),
            active,
            team_id,
        };
        let summary = PlayerSummary {
            id,
            display_name: display_name.to_string(),
            jersey: None,
            position: None,
            team_id,
        };
        self.insert(listing, summary, totals);
    }

    /// Replace a player's season totals, e.g. after a new season starts.
    pub fn set_totals(&self, id: PlayerId, totals: Vec<SeasonTotals>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(player) = state.players.get_mut(&id) {
            player.totals = totals;
        }
    }

    /// Make every call fail, as if the remote service were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.unavailable = unavailable;
    }

    fn read<T>(&self, f: impl FnOnce(&MemoryState) -> T) -> Result<T, ProviderError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if state.unavailable {
            return Err(ProviderError::Unavailable("memory provider offline".into()));
        }
        Ok(f(&state))
    }
}

#[async_trait]
impl StatsProvider for MemoryProvider {
    async fn player_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Option<PlayerListing>, ProviderError> {
        self.read(|state| {
            state
                .players
                .values()
                .find(|p| p.listing.matches_name(first, last))
                .map(|p| p.listing.clone())
        })
    }

    async fn career_totals(&self, id: PlayerId) -> Result<Vec<SeasonTotals>, ProviderError> {
        self.read(|state| {
            state
                .players
                .get(&id)
                .map(|p| p.totals.clone())
                .unwrap_or_default()
        })
    }

    async fn player_summary(&self, id: PlayerId) -> Result<PlayerSummary, ProviderError> {
        self.read(|state| state.players.get(&id).map(|p| p.summary.clone()))?
            .ok_or(ProviderError::NoSummary(id))
    }
}
