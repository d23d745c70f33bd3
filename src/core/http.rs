//! HTTP utilities for stats provider communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

/// Env var overriding the User-Agent sent to the stats provider.
pub const USER_AGENT_ENV_VAR: &str = "NBA_STATS_USER_AGENT";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// User-Agent from `NBA_STATS_USER_AGENT`, falling back to a desktop browser string.
pub fn resolve_user_agent() -> String {
    std::env::var(USER_AGENT_ENV_VAR).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string())
}

/// Build the header set the stats provider expects from a browser.
///
/// The provider drops requests without a browser-like User-Agent and the
/// `x-nba-stats-*` headers, so every request carries them.
pub fn provider_header_map(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    Ok(h)
}
