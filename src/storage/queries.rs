//! Lookups and aggregated views

use anyhow::Result;
use rusqlite::Row;
use tracing::{debug, warn};

use super::analysis::career_averages;
use super::models::*;
use super::procedures::{query, query_first, Procedure};
use super::schema::RecordStore;
use crate::cli::types::{PlayerId, TeamId, UserId};
use crate::core::names::normalize_query;

impl RecordStore {
    /// Match free text against stored team names.
    ///
    /// A failing procedure is logged and reported as `NotFound`.
    pub fn find_team(&self, text: &str) -> Outcome<TeamId> {
        let text = normalize_query(text);
        match self.lookup_id(Procedure::FindTeam, &text) {
            Ok(Some(id)) => Outcome::Found(TeamId::new(id)),
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                warn!(error = %e, query = %text, "Error while querying teams");
                Outcome::NotFound
            }
        }
    }

    /// Match free text against stored player names.
    ///
    /// A failing procedure is logged and reported as `NotFound`.
    pub fn find_player(&self, text: &str) -> Outcome<PlayerId> {
        let text = normalize_query(text);
        match self.lookup_id(Procedure::FindPlayer, &text) {
            Ok(Some(id)) => Outcome::Found(PlayerId::new(id)),
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                warn!(error = %e, query = %text, "Error while querying players");
                Outcome::NotFound
            }
        }
    }

    fn lookup_id(&self, procedure: Procedure, text: &str) -> Result<Option<u32>> {
        if text.is_empty() {
            return Ok(None);
        }
        let conn = self.lock()?;
        Ok(query_first(&conn, procedure, [text], |row| row.get(0))?)
    }

    /// Whether a base record exists for this player id.
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        let result = self.lock().and_then(|conn| {
            Ok(query_first(&conn, Procedure::GetPlayerInfo, [player_id.as_u32()], |row| {
                row.get::<_, u32>(0)
            })?)
        });

        match result {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(error = %e, %player_id, "Error while checking for stored player");
                false
            }
        }
    }

    /// Load a player's base record and season rows and compute the averages.
    ///
    /// `Failed` when the player has no season rows with games played: there is
    /// nothing to average.
    pub fn fetch_player_info(&self, player_id: PlayerId) -> Outcome<PlayerInfo> {
        match self.try_fetch_player_info(player_id) {
            Ok(Some((player, stats))) => match career_averages(&stats) {
                Some((career, career_games, by_team_season)) => Outcome::Found(PlayerInfo {
                    player,
                    career,
                    career_games,
                    by_team_season,
                }),
                None => {
                    warn!(%player_id, rows = stats.len(), "No games to average for player");
                    Outcome::Failed
                }
            },
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                warn!(error = %e, %player_id, "Something went wrong while fetching player statistics");
                Outcome::Failed
            }
        }
    }

    fn try_fetch_player_info(
        &self,
        player_id: PlayerId,
    ) -> Result<Option<(PlayerRecord, Vec<SeasonStat>)>> {
        let conn = self.lock()?;
        let Some(player) = query_first(
            &conn,
            Procedure::GetPlayerInfo,
            [player_id.as_u32()],
            row_to_player,
        )?
        else {
            return Ok(None);
        };

        let stats = query(
            &conn,
            Procedure::GetPlayerStats,
            [player_id.as_u32()],
            row_to_season_stat,
        )?;
        debug!(%player_id, seasons = stats.len(), "Loaded player records");

        Ok(Some((player, stats)))
    }

    /// Load a team record and its stored roster.
    pub fn fetch_team_info(&self, team_id: TeamId) -> Outcome<TeamInfo> {
        match self.try_fetch_team_info(team_id) {
            Ok(Some(info)) => Outcome::Found(info),
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                warn!(error = %e, %team_id, "Something went wrong while fetching team records");
                Outcome::Failed
            }
        }
    }

    fn try_fetch_team_info(&self, team_id: TeamId) -> Result<Option<TeamInfo>> {
        let conn = self.lock()?;
        let Some(team) = query_first(&conn, Procedure::GetTeamInfo, [team_id.as_u32()], |row| {
            Ok(TeamRecord {
                team_id: TeamId::new(row.get(0)?),
                city: row.get(1)?,
                nickname: row.get(2)?,
                abbreviation: row.get(3)?,
            })
        })?
        else {
            return Ok(None);
        };

        let roster = query(&conn, Procedure::GetTeamRoster, [team_id.as_u32()], |row| {
            Ok(RosterEntry {
                player_id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;

        Ok(Some(TeamInfo { team, roster }))
    }

    /// Fetch an admin user by id.
    ///
    /// Library API for session-style callers; the web API authenticates
    /// every admin request with Basic credentials and never loads by id.
    pub fn lookup_user(&self, user_id: UserId) -> Outcome<UserRecord> {
        let result = self.lock().and_then(|conn| {
            Ok(query_first(&conn, Procedure::GetUser, [user_id.as_i64()], |row| {
                Ok(UserRecord {
                    user_id: UserId::new(row.get(0)?),
                    username: row.get(1)?,
                })
            })?)
        });

        match result {
            Ok(Some(user)) => Outcome::Found(user),
            Ok(None) => Outcome::NotFound,
            Err(e) => {
                warn!(error = %e, %user_id, "Could not fetch user");
                Outcome::NotFound
            }
        }
    }

    /// Check a username/password pair.
    ///
    /// Unknown users, wrong passwords and verification failures are all `NotFound`.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> Outcome<UserRecord> {
        let stored = self.lock().and_then(|conn| {
            Ok(query_first(&conn, Procedure::ValidateLogin, [username], |row| {
                Ok((
                    UserRecord {
                        user_id: UserId::new(row.get(0)?),
                        username: row.get(1)?,
                    },
                    row.get::<_, String>(2)?,
                ))
            })?)
        });

        let (user, hash) = match stored {
            Ok(Some(found)) => found,
            Ok(None) => return Outcome::NotFound,
            Err(e) => {
                warn!(error = %e, %username, "Could not authenticate user");
                return Outcome::NotFound;
            }
        };

        // bcrypt is CPU-bound; keep it off the async workers.
        let password = password.to_string();
        let verified =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await;

        match verified {
            Ok(Ok(true)) => Outcome::Found(user),
            Ok(Ok(false)) => Outcome::NotFound,
            Ok(Err(e)) => {
                warn!(error = %e, %username, "Could not verify stored credential");
                Outcome::NotFound
            }
            Err(e) => {
                warn!(error = %e, %username, "Credential check task failed");
                Outcome::NotFound
            }
        }
    }
}

fn row_to_player(row: &Row<'_>) -> rusqlite::Result<PlayerRecord> {
    Ok(PlayerRecord {
        player_id: PlayerId::new(row.get(0)?),
        name: row.get(1)?,
        team_id: TeamId::new(row.get(2)?),
        team_name: row.get(3)?,
        position: row.get(4)?,
        jersey: row.get(5)?,
    })
}

fn row_to_season_stat(row: &Row<'_>) -> rusqlite::Result<SeasonStat> {
    Ok(SeasonStat {
        season: row.get(0)?,
        team_id: TeamId::new(row.get(1)?),
        team_abbreviation: row.get(2)?,
        games_played: row.get(3)?,
        points: row.get(4)?,
        rebounds: row.get(5)?,
        assists: row.get(6)?,
    })
}
