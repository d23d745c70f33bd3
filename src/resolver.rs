//! Free-text query resolution.
//!
//! Input is tried against stored teams, then stored players, and finally
//! against the stats provider's player directory. A new active player found
//! at the provider is fetched and stored before being returned.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::types::{PlayerId, TeamId};
use crate::core::names::{normalize_query, split_full_name};
use crate::provider::PlayerListing;
use crate::storage::{Outcome, RecordStore};


/// What a query resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Resolution {
    Team(TeamId),
    Player(PlayerId),
    NoMatch,
}

/// Resolves search text against the record store and the stats provider
#[derive(Clone)]
pub struct QueryResolver {
    store: RecordStore,
}

impl QueryResolver {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Resolve free text. First match wins: team, stored player, then an
    /// active player at the provider (which gets inserted).
    pub async fn resolve(&self, text: &str) -> Resolution {
        let query = normalize_query(text);
        if query.is_empty() {
            return Resolution::NoMatch;
        }

        if let Outcome::Found(team_id) = self.store.find_team(&query) {
            debug!(%query, %team_id, "Resolved query to team");
            return Resolution::Team(team_id);
        }

        if let Outcome::Found(player_id) = self.store.find_player(&query) {
            debug!(%query, %player_id, "Resolved query to stored player");
            return Resolution::Player(player_id);
        }

        let Some(listing) = self.active_listing(&query).await else {
            info!(%query, "Search did not match any players or teams");
            return Resolution::NoMatch;
        };

        match self.store_listing(&listing).await {
            Outcome::Found(player_id) => Resolution::Player(player_id),
            // A concurrent search may have stored the same player first.
            Outcome::Failed if self.store.has_player(listing.id) => {
                debug!(player_id = %listing.id, "Player was stored by another request");
                Resolution::Player(listing.id)
            }
            Outcome::NotFound | Outcome::Failed => {
                info!(%query, "Search did not match any players or teams");
                Resolution::NoMatch
            }
        }
    }

    /// Look a player up at the provider and store them, skipping the local
    /// search. `NotFound` for unknown or inactive players.
    pub async fn add_player(&self, text: &str) -> Outcome<PlayerId> {
        self.fetch_new_player(&normalize_query(text)).await
    }

    async fn fetch_new_player(&self, query: &str) -> Outcome<PlayerId> {
        match self.active_listing(query).await {
            Some(listing) => self.store_listing(&listing).await,
            None => Outcome::NotFound,
        }
    }

    async fn store_listing(&self, listing: &PlayerListing) -> Outcome<PlayerId> {
        self.store
            .insert_player(listing.id, &listing.display_name, listing.team_id)
            .await
    }

    async fn active_listing(&self, query: &str) -> Option<PlayerListing> {
        let (first, last) = split_full_name(query)?;

        let listing = match self.store.provider().player_by_name(&first, &last).await {
            Ok(listing) => listing?,
            Err(e) => {
                warn!(error = %e, %query, "Stats provider lookup failed");
                return None;
            }
        };

        if !listing.active {
            debug!(player_id = %listing.id, "Provider match is not an active player");
            return None;
        }
        Some(listing)
    }
}
