//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, Season, TeamId};

/// Options shared by every command
#[derive(Debug, Clone, Args)]
pub struct GlobalOpts {
    /// SQLite database file (or set `NBA_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Season for provider directory lookups (e.g. 2024-25 or 2024).
    #[clap(long, global = true, default_value_t = Season::default())]
    pub season: Season,

    /// Stats provider base URL (or set `NBA_STATS_PROVIDER_URL` env var).
    #[clap(long, global = true)]
    pub provider_url: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Debug-level logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "NBA player and team stats", version)]
pub struct NbaStats {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the JSON web API.
    Serve {
        /// Address to bind.
        #[clap(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on.
        #[clap(long, short, default_value_t = 8080)]
        port: u16,

        /// Per-request timeout in seconds.
        #[clap(long, default_value_t = 30)]
        timeout: u64,
    },

    /// Resolve free text to a team or player.
    ///
    /// Unknown active players are fetched from the stats provider and stored.
    Search {
        /// Team or player name, e.g. "lakers" or "lebron james".
        #[clap(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show a stored player's career and per-team-season averages.
    Player {
        /// Provider player ID.
        id: PlayerId,
    },

    /// Show a team and its stored roster.
    Team {
        /// Provider team ID.
        id: TeamId,
    },

    /// Fetch a player from the stats provider and store them.
    AddPlayer {
        #[clap(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Refresh a stored player's record and season rows from the provider.
    UpdatePlayer {
        #[clap(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a stored player and their season rows.
    ///
    /// Use `--id` when several stored players share the name.
    DeletePlayer {
        /// Provider player ID.
        #[clap(long, conflicts_with = "name")]
        id: Option<PlayerId>,

        #[clap(required_unless_present = "id", num_args = 1..)]
        name: Vec<String>,
    },

    /// Create an admin account for the web API.
    AddUser {
        username: String,

        #[clap(long)]
        password: String,
    },
}
