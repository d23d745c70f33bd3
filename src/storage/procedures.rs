//! The procedure catalogue.
//!
//! The record store never issues ad-hoc SQL: every read and write is one of
//! the named, positional-argument procedures below, executed through
//! [`call`] or [`query`]. Transactions wrap sequences of calls.

use rusqlite::{Connection, Params, Row};
use tracing::trace;

/// Named stored procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    /// `(query)` -> team_id
    FindTeam,
    /// `(query)` -> player_id
    FindPlayer,
    /// `(exact lower-case name)` -> player_id*
    FindPlayersByName,
    /// `(player_id)` -> player_id, name, team_id, team name, position, jersey
    GetPlayerInfo,
    /// `(player_id)` -> season, team_id, abbreviation, gp, pts, reb, ast
    GetPlayerStats,
    /// `(team_id)` -> team_id, city, nickname, abbreviation
    GetTeamInfo,
    /// `(team_id)` -> player_id, name
    GetTeamRoster,
    /// `(user_id)` -> user_id, username
    GetUser,
    /// `(username)` -> user_id, username, password_hash
    ValidateLogin,
    /// `(player_id, name, team_id, position, jersey)`
    InsertPlayerInfo,
    /// `(player_id, team_id, season, gp, pts, reb, ast)`
    InsertPlayerStats,
    /// `(name, team_id, player_id)`
    UpdatePlayerInfo,
    /// `(player_id)`
    DeletePlayerRecords,
    /// `(username, password_hash)`
    InsertUser,
}

impl Procedure {
    pub fn name(&self) -> &'static str {
        match self {
            Procedure::FindTeam => "find_team",
            Procedure::FindPlayer => "find_player",
            Procedure::FindPlayersByName => "find_players_by_name",
            Procedure::GetPlayerInfo => "get_player_info",
            Procedure::GetPlayerStats => "get_player_stats",
            Procedure::GetTeamInfo => "get_team_info",
            Procedure::GetTeamRoster => "get_team_roster",
            Procedure::GetUser => "get_user",
            Procedure::ValidateLogin => "validate_login",
            Procedure::InsertPlayerInfo => "insert_player_info",
            Procedure::InsertPlayerStats => "insert_player_stats",
            Procedure::UpdatePlayerInfo => "update_player_info",
            Procedure::DeletePlayerRecords => "delete_player_records",
            Procedure::InsertUser => "insert_user",
        }
    }

    /// Writes go through [`call`], reads through [`query`].
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Procedure::InsertPlayerInfo
                | Procedure::InsertPlayerStats
                | Procedure::UpdatePlayerInfo
                | Procedure::DeletePlayerRecords
                | Procedure::InsertUser
        )
    }

    pub fn sql(&self) -> &'static str {
        match self {
            // Exact name/nickname/city/abbreviation first, then full-name substring.
            Procedure::FindTeam => {
                "SELECT team_id FROM teams
                 WHERE lower(city || ' ' || nickname) = ?1
                    OR lower(nickname) = ?1
                    OR lower(city) = ?1
                    OR lower(abbreviation) = ?1
                    OR (length(?1) >= 4 AND instr(lower(city || ' ' || nickname), ?1) > 0)
                 ORDER BY CASE
                     WHEN lower(city || ' ' || nickname) = ?1 OR lower(nickname) = ?1 THEN 0
                     WHEN lower(abbreviation) = ?1 OR lower(city) = ?1 THEN 1
                     ELSE 2
                 END, team_id
                 LIMIT 1"
            }
            Procedure::FindPlayer => {
                "SELECT player_id FROM players
                 WHERE lower(name) = ?1
                    OR (length(?1) >= 4 AND instr(lower(name), ?1) > 0)
                 ORDER BY CASE WHEN lower(name) = ?1 THEN 0 ELSE 1 END, name, player_id
                 LIMIT 1"
            }
            Procedure::FindPlayersByName => {
                "SELECT player_id FROM players WHERE lower(name) = ?1 ORDER BY player_id"
            }
            Procedure::GetPlayerInfo => {
                "SELECT p.player_id, p.name, p.team_id, t.city || ' ' || t.nickname,
                        p.position, p.jersey
                 FROM players p
                 LEFT JOIN teams t ON t.team_id = p.team_id
                 WHERE p.player_id = ?1"
            }
            Procedure::GetPlayerStats => {
                "SELECT s.season, s.team_id, t.abbreviation,
                        s.games_played, s.points, s.rebounds, s.assists
                 FROM season_stats s
                 LEFT JOIN teams t ON t.team_id = s.team_id
                 WHERE s.player_id = ?1 AND s.team_id <> 0
                 ORDER BY s.season, s.team_id"
            }
            Procedure::GetTeamInfo => {
                "SELECT team_id, city, nickname, abbreviation FROM teams WHERE team_id = ?1"
            }
            Procedure::GetTeamRoster => {
                "SELECT player_id, name FROM players WHERE team_id = ?1 ORDER BY name, player_id"
            }
            Procedure::GetUser => "SELECT user_id, username FROM users WHERE user_id = ?1",
            Procedure::ValidateLogin => {
                "SELECT user_id, username, password_hash FROM users WHERE username = ?1"
            }
            Procedure::InsertPlayerInfo => {
                "INSERT INTO players (player_id, name, team_id, position, jersey)
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            }
            // Upsert keyed by (player, team, season): re-running never duplicates a season.
            Procedure::InsertPlayerStats => {
                "INSERT INTO season_stats
                     (player_id, team_id, season, games_played, points, rebounds, assists)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT (player_id, team_id, season) DO UPDATE SET
                     games_played = excluded.games_played,
                     points = excluded.points,
                     rebounds = excluded.rebounds,
                     assists = excluded.assists"
            }
            Procedure::UpdatePlayerInfo => {
                "UPDATE players SET name = ?1, team_id = ?2 WHERE player_id = ?3"
            }
            // Season rows go with the player via ON DELETE CASCADE.
            Procedure::DeletePlayerRecords => "DELETE FROM players WHERE player_id = ?1",
            Procedure::InsertUser => {
                "INSERT INTO users (username, password_hash) VALUES (?1, ?2)"
            }
        }
    }
}

/// Execute a write procedure, returning the number of rows affected.
pub fn call<P: Params>(conn: &Connection, procedure: Procedure, params: P) -> rusqlite::Result<usize> {
    debug_assert!(procedure.is_write(), "{} is a read procedure", procedure.name());
    trace!(procedure = procedure.name(), "call");
    conn.prepare_cached(procedure.sql())?.execute(params)
}

/// Execute a read procedure, mapping every result row.
pub fn query<T, P, F>(
    conn: &Connection,
    procedure: Procedure,
    params: P,
    f: F,
) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    debug_assert!(!procedure.is_write(), "{} is a write procedure", procedure.name());
    trace!(procedure = procedure.name(), "query");
    let mut stmt = conn.prepare_cached(procedure.sql())?;
    let rows = stmt.query_map(params, f)?;
    rows.collect()
}

/// Execute a read procedure that yields at most one interesting row.
pub fn query_first<T, P, F>(
    conn: &Connection,
    procedure: Procedure,
    params: P,
    f: F,
) -> rusqlite::Result<Option<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    Ok(query(conn, procedure, params, f)?.into_iter().next())
}
