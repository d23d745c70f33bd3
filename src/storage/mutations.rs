//! All-or-nothing player and user writes.
//!
//! Every mutation gathers what it needs from the stats provider first, then
//! takes the connection and runs its procedure calls inside one transaction.
//! Any failing call drops the transaction, which rolls it back.

use anyhow::{bail, Result};
use rusqlite::{params, Connection};
use tracing::{error, info, warn};

use super::models::Outcome;
use super::procedures::{call, query, Procedure};
use super::schema::RecordStore;
use crate::cli::types::{PlayerId, TeamId, UserId};
use crate::core::names::{normalize_query, split_full_name};
use crate::provider::{PlayerListing, PlayerSummary, ProviderError, SeasonTotals};

/// Default bcrypt cost for new admin accounts.
pub const DEFAULT_PASSWORD_COST: u32 = bcrypt::DEFAULT_COST;

impl RecordStore {
    /// Fetch a player's summary and career totals from the provider and store
    /// the base record plus every per-team season row in one transaction.
    pub async fn insert_player(
        &self,
        player_id: PlayerId,
        name: &str,
        team_id: TeamId,
    ) -> Outcome<PlayerId> {
        let (summary, totals) = match self.fetch_from_provider(player_id).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(error = %e, %player_id, "Stats provider failed while adding player");
                return Outcome::Failed;
            }
        };

        match self.write_new_player(player_id, name, team_id, &summary, &totals) {
            Ok(seasons) => {
                info!(%player_id, player = %name, seasons, "Inserted player into the database");
                Outcome::Found(player_id)
            }
            Err(e) => {
                error!(error = %e, %player_id, player = %name, "Rolled back player insert");
                Outcome::Failed
            }
        }
    }

    async fn fetch_from_provider(
        &self,
        player_id: PlayerId,
    ) -> std::result::Result<(PlayerSummary, Vec<SeasonTotals>), ProviderError> {
        tokio::try_join!(
            self.provider.player_summary(player_id),
            self.provider.career_totals(player_id)
        )
    }

    fn write_new_player(
        &self,
        player_id: PlayerId,
        name: &str,
        team_id: TeamId,
        summary: &PlayerSummary,
        totals: &[SeasonTotals],
    ) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        call(
            &tx,
            Procedure::InsertPlayerInfo,
            params![
                player_id.as_u32(),
                name,
                team_id.as_u32(),
                summary.position,
                summary.jersey
            ],
        )?;
        let seasons = write_season_rows(&tx, player_id, totals)?;

        tx.commit()?;
        Ok(seasons)
    }

    /// Re-resolve a player by name at the provider, refresh the stored base
    /// record and upsert every season row.
    ///
    /// `NotFound` when the provider has no such player or the player was never
    /// stored.
    pub async fn update_player(&self, name_query: &str) -> Outcome<PlayerId> {
        let Some((first, last)) = split_full_name(name_query) else {
            warn!(query = %name_query, "Update needs a first and last name");
            return Outcome::NotFound;
        };

        let listing = match self.provider.player_by_name(&first, &last).await {
            Ok(Some(listing)) => listing,
            Ok(None) => {
                warn!(query = %name_query, "Stats provider has no player by that name");
                return Outcome::NotFound;
            }
            Err(e) => {
                warn!(error = %e, query = %name_query, "Stats provider failed while updating player");
                return Outcome::Failed;
            }
        };

        let totals = match self.provider.career_totals(listing.id).await {
            Ok(totals) => totals,
            Err(e) => {
                warn!(error = %e, player_id = %listing.id, "Stats provider failed while updating player");
                return Outcome::Failed;
            }
        };

        match self.write_player_refresh(&listing, &totals) {
            Ok(Some(seasons)) => {
                info!(player_id = %listing.id, player = %listing.display_name, seasons, "Updated player records");
                Outcome::Found(listing.id)
            }
            Ok(None) => {
                warn!(player_id = %listing.id, "Player is not in the database");
                Outcome::NotFound
            }
            Err(e) => {
                error!(error = %e, player_id = %listing.id, "Rolled back player update");
                Outcome::Failed
            }
        }
    }

    fn write_player_refresh(
        &self,
        listing: &PlayerListing,
        totals: &[SeasonTotals],
    ) -> Result<Option<usize>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let updated = call(
            &tx,
            Procedure::UpdatePlayerInfo,
            params![listing.display_name, listing.team_id.as_u32(), listing.id.as_u32()],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        let seasons = write_season_rows(&tx, listing.id, totals)?;

        tx.commit()?;
        Ok(Some(seasons))
    }

    /// Delete the one stored player with this exact name, with its season rows.
    ///
    /// Refuses (`Failed`, nothing deleted) when several stored players share the name.
    pub fn delete_player(&self, name_query: &str) -> Outcome<PlayerId> {
        let name = normalize_query(name_query);
        let result = self.lock().and_then(|mut conn| {
            let tx = conn.transaction()?;
            let ids: Vec<u32> = query(&tx, Procedure::FindPlayersByName, [name.as_str()], |row| row.get(0))?;
            let player_id = match ids.as_slice() {
                [] => return Ok(None),
                [id] => PlayerId::new(*id),
                _ => bail!("{} stored players are named {name}; delete by id instead", ids.len()),
            };
            call(&tx, Procedure::DeletePlayerRecords, [player_id.as_u32()])?;
            tx.commit()?;
            Ok(Some(player_id))
        });

        match result {
            Ok(Some(player_id)) => {
                info!(%player_id, player = %name, "Deleted player records");
                Outcome::Found(player_id)
            }
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                error!(error = %e, player = %name, "Something went wrong when trying to delete player records");
                Outcome::Failed
            }
        }
    }

    /// Delete a player and their season rows by id.
    pub fn delete_player_by_id(&self, player_id: PlayerId) -> Outcome<PlayerId> {
        let result = self.lock().and_then(|mut conn| {
            let tx = conn.transaction()?;
            let deleted = call(&tx, Procedure::DeletePlayerRecords, [player_id.as_u32()])?;
            tx.commit()?;
            Ok(deleted)
        });

        match result {
            Ok(0) => Outcome::NotFound,
            Ok(_) => {
                info!(%player_id, "Deleted player records");
                Outcome::Found(player_id)
            }
            Err(e) => {
                error!(error = %e, %player_id, "Something went wrong when trying to delete player records");
                Outcome::Failed
            }
        }
    }

    /// Create an admin account with a bcrypt-hashed password.
    pub async fn create_user(&self, username: &str, password: &str, cost: u32) -> Outcome<UserId> {
        let password = password.to_string();
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await;

        let hash = match hashed {
            Ok(Ok(hash)) => hash,
            Ok(Err(e)) => {
                error!(error = %e, %username, "Could not hash password");
                return Outcome::Failed;
            }
            Err(e) => {
                error!(error = %e, %username, "Password hashing task failed");
                return Outcome::Failed;
            }
        };

        let result = self.lock().and_then(|conn| {
            call(&conn, Procedure::InsertUser, params![username, hash])?;
            Ok(UserId::new(conn.last_insert_rowid()))
        });

        match result {
            Ok(user_id) => {
                info!(%user_id, %username, "Created user");
                Outcome::Found(user_id)
            }
            Err(e) => {
                error!(error = %e, %username, "Could not create user");
                Outcome::Failed
            }
        }
    }
}

/// Upsert every per-team season row, skipping the provider's multi-team aggregates.
fn write_season_rows(conn: &Connection, player_id: PlayerId, totals: &[SeasonTotals]) -> Result<usize> {
    let mut written = 0;
    for row in totals.iter().filter(|row| !row.is_aggregate()) {
        call(
            conn,
            Procedure::InsertPlayerStats,
            params![
                player_id.as_u32(),
                row.team_id.as_u32(),
                row.season,
                row.games_played,
                row.points,
                row.rebounds,
                row.assists
            ],
        )?;
        written += 1;
    }
    Ok(written)
}
