//! Error types for the NBA stats application

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Could not open database at {path}: {message}")]
    Connection { path: String, message: String },

    #[error("{name} not provided and {env_var} environment variable not set")]
    MissingConfig { name: String, env_var: String },

    #[error("Invalid season: {season}")]
    InvalidSeason { season: String },

    #[error("No games recorded for player {player_id}")]
    NoStats { player_id: String },

    #[error("{0}")]
    CommandFailed(String),

    #[error("{kind} not found: {query}")]
    NotFound { kind: String, query: String },
}
