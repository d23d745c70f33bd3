//! Common utilities and helper functions shared across commands.
//!
//! Configuration resolution (flag, then environment, then default) and the
//! store/resolver context every command runs against.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    cli::GlobalOpts,
    core::resolve_user_agent,
    error::NbaError,
    provider::{http::STATS_BASE_URL, NbaStatsClient, ProviderConfig},
    QueryResolver, RecordStore, Result, DB_PATH_ENV_VAR, PROVIDER_URL_ENV_VAR,
};

/// Resolve the database path from the flag, the environment, or the
/// platform data directory.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    db_path
        .or_else(|| {
            std::env::var(DB_PATH_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::data_dir().map(|dir| dir.join("nba-stats").join("nba.db")))
        .ok_or_else(|| NbaError::MissingConfig {
            name: "Database path".to_string(),
            env_var: DB_PATH_ENV_VAR.to_string(),
        })
}

/// Resolve the stats provider base URL from the flag or the environment,
/// falling back to stats.nba.com.
pub fn resolve_provider_url(provider_url: Option<String>) -> String {
    provider_url
        .or_else(|| {
            std::env::var(PROVIDER_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| STATS_BASE_URL.to_string())
}

/// Context containing the resources every command needs
pub struct CommandContext {
    pub store: RecordStore,
    pub resolver: QueryResolver,
    pub as_json: bool,
}

impl CommandContext {
    /// Open the record store against the HTTP stats provider.
    pub fn new(opts: &GlobalOpts) -> Result<Self> {
        let config = ProviderConfig {
            base_url: resolve_provider_url(opts.provider_url.clone()),
            season: opts.season,
            user_agent: resolve_user_agent(),
            ..ProviderConfig::default()
        };
        let provider = Arc::new(NbaStatsClient::new(config)?);

        let db_path = resolve_db_path(opts.db_path.clone())?;
        let store = RecordStore::open(&db_path, provider)?;

        Ok(Self::from_store(store, opts.json))
    }

    pub fn from_store(store: RecordStore, as_json: bool) -> Self {
        let resolver = QueryResolver::new(store.clone());
        Self {
            store,
            resolver,
            as_json,
        }
    }

    /// Print `value` as pretty JSON, or the text rendering otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.as_json {
            println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
        } else {
            println!("{}", text()); // tarpaulin::skip
        }
        Ok(())
    }
}

/// Join multi-word positional arguments back into one query.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
