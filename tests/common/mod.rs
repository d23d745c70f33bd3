//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use nba_stats::{
    provider::{MemoryProvider, SeasonTotals},
    PlayerId, TeamId,
};

pub const LAKERS: u32 = 1610612747;
pub const CAVS: u32 = 1610612739;
pub const LEBRON: u32 = 2544;

pub fn season(player: u32, label: &str, team: u32, gp: u32, pts: f64, reb: f64, ast: f64) -> SeasonTotals {
    SeasonTotals::new(PlayerId::new(player), label, TeamId::new(team), gp, pts, reb, ast)
}

/// Provider holding LeBron James (active) and one retired player.
pub fn league_provider() -> Arc<MemoryProvider> {
    let provider = Arc::new(MemoryProvider::new());
    provider.add_player(
        PlayerId::new(LEBRON),
        "LeBron James",
        TeamId::new(LAKERS),
        true,
        vec![
            season(LEBRON, "2019-20", LAKERS, 10, 200.0, 50.0, 30.0),
            season(LEBRON, "2020-21", LAKERS, 5, 80.0, 20.0, 10.0),
        ],
    );
    provider.add_player(PlayerId::new(977), "Kobe Bryant", TeamId::new(LAKERS), false, vec![]);
    provider
}
