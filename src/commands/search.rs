//! Search command implementation

use tracing::info;

use super::common::CommandContext;
use crate::{Resolution, Result};

/// Message shown when a search resolves to nothing.
pub fn no_match_message(query: &str) -> String {
    format!("Your search {query} did not match any players or teams!")
}

/// Text rendering of a resolution.
pub fn format_resolution(query: &str, resolution: &Resolution) -> String {
    match resolution {
        Resolution::Team(id) => format!("team {id}"),
        Resolution::Player(id) => format!("player {id}"),
        Resolution::NoMatch => no_match_message(query),
    }
}

/// Handle the search command
pub async fn handle_search(ctx: &CommandContext, query: &str) -> Result<()> {
    // tarpaulin::skip - may call the stats provider, tested via integration tests
    let resolution = ctx.resolver.resolve(query).await;
    info!(%query, ?resolution, "Search resolved");

    ctx.emit(&resolution, || format_resolution(query, &resolution))
}
