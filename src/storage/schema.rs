//! Database schema and connection management

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use rusqlite::Connection;
use tracing::info;

use crate::error::NbaError;
use crate::provider::StatsProvider;

/// Handle to the record store.
///
/// Cloning is cheap: clones share one connection and one stats provider.
/// The connection mutex is only held for synchronous work, never across a
/// provider call.
#[derive(Clone)]
pub struct RecordStore {
    pub(crate) conn: Arc<Mutex<Connection>>,
    pub(crate) provider: Arc<dyn StatsProvider>,
}

impl RecordStore {
    /// Open (creating if needed) the database file and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>, provider: Arc<dyn StatsProvider>) -> crate::Result<Self> {
        let path = path.as_ref();
        let connection_error = |message: String| NbaError::Connection {
            path: path.display().to_string(),
            message,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| connection_error(e.to_string()))?;
        }

        let conn = Connection::open(path).map_err(|e| connection_error(e.to_string()))?;
        let store = Self::from_connection(conn, provider)
            .map_err(|e| connection_error(e.to_string()))?;

        info!(path = %path.display(), "Opened record store");
        Ok(store)
    }

    /// Open a private in-memory database (for testing and one-shot runs)
    pub fn open_in_memory(provider: Arc<dyn StatsProvider>) -> crate::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, provider).map_err(|e| NbaError::Connection {
            path: ":memory:".to_string(),
            message: e.to_string(),
        })
    }

    fn from_connection(
        conn: Connection,
        provider: Arc<dyn StatsProvider>,
    ) -> anyhow::Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            provider,
        })
    }

    /// Take the connection for one synchronous unit of work.
    pub(crate) fn lock(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("record store connection poisoned"))
    }

    pub fn provider(&self) -> &Arc<dyn StatsProvider> {
        &self.provider
    }
}

/// Create tables, indexes and the franchise seed rows
pub(crate) fn initialize_schema(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(SCHEMA)?;
    conn.execute_batch(INDEXES)?;

    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO teams (team_id, city, nickname, abbreviation)
         VALUES (?, ?, ?, ?)",
    )?;
    for (team_id, city, nickname, abbreviation) in NBA_TEAMS {
        stmt.execute(rusqlite::params![team_id, city, nickname, abbreviation])?;
    }

    Ok(())
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS teams (
    team_id INTEGER PRIMARY KEY,
    city TEXT NOT NULL,
    nickname TEXT NOT NULL,
    abbreviation TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS players (
    player_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    team_id INTEGER NOT NULL DEFAULT 0,
    position TEXT,
    jersey TEXT
);

CREATE TABLE IF NOT EXISTS season_stats (
    player_id INTEGER NOT NULL,
    team_id INTEGER NOT NULL CHECK (team_id <> 0),
    season TEXT NOT NULL CHECK (length(season) > 0),
    games_played INTEGER NOT NULL CHECK (games_played >= 0),
    points REAL NOT NULL,
    rebounds REAL NOT NULL,
    assists REAL NOT NULL,
    PRIMARY KEY (player_id, team_id, season),
    FOREIGN KEY (player_id) REFERENCES players(player_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);
"#;

const INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id);
CREATE INDEX IF NOT EXISTS idx_players_name ON players(name COLLATE NOCASE);
"#;

/// (team id, city, nickname, abbreviation) for the 30 current franchises
pub const NBA_TEAMS: [(u32, &str, &str, &str); 30] = [
    (1610612737, "Atlanta", "Hawks", "ATL"),
    (1610612738, "Boston", "Celtics", "BOS"),
    (1610612739, "Cleveland", "Cavaliers", "CLE"),
    (1610612740, "New Orleans", "Pelicans", "NOP"),
    (1610612741, "Chicago", "Bulls", "CHI"),
    (1610612742, "Dallas", "Mavericks", "DAL"),
    (1610612743, "Denver", "Nuggets", "DEN"),
    (1610612744, "Golden State", "Warriors", "GSW"),
    (1610612745, "Houston", "Rockets", "HOU"),
    (1610612746, "Los Angeles", "Clippers", "LAC"),
    (1610612747, "Los Angeles", "Lakers", "LAL"),
    (1610612748, "Miami", "Heat", "MIA"),
    (1610612749, "Milwaukee", "Bucks", "MIL"),
    (1610612750, "Minnesota", "Timberwolves", "MIN"),
    (1610612751, "Brooklyn", "Nets", "BKN"),
    (1610612752, "New York", "Knicks", "NYK"),
    (1610612753, "Orlando", "Magic", "ORL"),
    (1610612754, "Indiana", "Pacers", "IND"),
    (1610612755, "Philadelphia", "76ers", "PHI"),
    (1610612756, "Phoenix", "Suns", "PHX"),
    (1610612757, "Portland", "Trail Blazers", "POR"),
    (1610612758, "Sacramento", "Kings", "SAC"),
    (1610612759, "San Antonio", "Spurs", "SAS"),
    (1610612760, "Oklahoma City", "Thunder", "OKC"),
    (1610612761, "Toronto", "Raptors", "TOR"),
    (1610612762, "Utah", "Jazz", "UTA"),
    (1610612763, "Memphis", "Grizzlies", "MEM"),
    (1610612764, "Washington", "Wizards", "WAS"),
    (1610612765, "Detroit", "Pistons", "DET"),
    (1610612766, "Charlotte", "Hornets", "CHA"),
];
