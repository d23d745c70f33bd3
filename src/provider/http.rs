use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use tracing::debug;

use super::types::{PlayerListing, PlayerSummary, SeasonTotals, StatsResponse};
use super::{ProviderError, StatsProvider};
use crate::cli::types::{PlayerId, Season};
use crate::core::http::{provider_header_map, DEFAULT_USER_AGENT};


/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// League id for the NBA (as opposed to the G League or WNBA).
const NBA_LEAGUE_ID: &str = "00";

/// Connection settings for [`NbaStatsClient`]
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Season used for the player directory lookup.
    pub season: Season,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: STATS_BASE_URL.to_string(),
            season: Season::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the stats.nba.com JSON endpoints
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    headers: HeaderMap,
    config: ProviderConfig,
}

impl NbaStatsClient {
    pub fn new(config: ProviderConfig) -> crate::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let headers = provider_header_map(&config.user_agent)?;
        Ok(Self {
            client,
            headers,
            config,
        })
    }

    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<StatsResponse, ProviderError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        debug!(%url, ?params, "stats provider request");

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        Ok(res)
    }
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn player_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Option<PlayerListing>, ProviderError> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", self.config.season.label()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        let response = self.get("commonallplayers", &params).await?;
        let listings: Vec<PlayerListing> =
            response.result_set("CommonAllPlayers")?.records()?;

        Ok(listings
            .into_iter()
            .find(|listing| listing.matches_name(first, last)))
    }

    async fn career_totals(&self, id: PlayerId) -> Result<Vec<SeasonTotals>, ProviderError> {
        let params = [
            ("PlayerID", id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        let response = self.get("playercareerstats", &params).await?;
        response.result_set("SeasonTotalsRegularSeason")?.records()
    }

    async fn player_summary(&self, id: PlayerId) -> Result<PlayerSummary, ProviderError> {
        let params = [
            ("PlayerID", id.to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];
        let response = self.get("commonplayerinfo", &params).await?;
        let summaries: Vec<PlayerSummary> =
            response.result_set("CommonPlayerInfo")?.records()?;

        summaries
            .into_iter()
            .next()
            .ok_or(ProviderError::NoSummary(id))
    }
}
