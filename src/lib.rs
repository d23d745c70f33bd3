//! NBA Stats Library
//!
//! Search NBA players and teams, view per-game averages, and manage a local
//! record store that caches player data pulled from the NBA stats API.
//!
//! ## Features
//!
//! - **Query Resolution**: Free-text search resolved to a team, a stored player,
//!   or a new player fetched from the stats provider
//! - **Record Store**: SQLite storage accessed through named procedures, with
//!   all-or-nothing mutations
//! - **Career Aggregates**: Per-team-season and career per-game averages
//! - **Admin Operations**: Add, refresh, and delete player records behind
//!   bcrypt-checked credentials
//! - **JSON API**: axum routes for search, team/player views and admin actions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nba_stats::{provider::NbaStatsClient, resolver::QueryResolver, storage::RecordStore};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let provider = Arc::new(NbaStatsClient::new(Default::default())?);
//! let store = RecordStore::open("nba.db", provider)?;
//! let resolver = QueryResolver::new(store.clone());
//!
//! let resolution = resolver.resolve("lakers").await;
//! println!("{resolution:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_DB=/var/lib/nba-stats/nba.db
//! export NBA_STATS_PROVIDER_URL=https://stats.nba.com/stats
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod provider;
pub mod resolver;
pub mod storage;
pub mod web;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, TeamId, UserId};
pub use error::{NbaError, Result};
pub use resolver::{QueryResolver, Resolution};
pub use storage::{Outcome, RecordStore};

pub const DB_PATH_ENV_VAR: &str = "NBA_STATS_DB";
pub const PROVIDER_URL_ENV_VAR: &str = "NBA_STATS_PROVIDER_URL";
