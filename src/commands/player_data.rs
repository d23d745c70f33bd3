//! Player view command.
//!
//! Prints a stored player's base record, career per-game averages and one
//! line per team per season. The player must already be stored; use
//! `search` or `add-player` to fetch one from the stats provider.

use std::fmt::Write as _;

use super::common::CommandContext;
use crate::{
    error::NbaError,
    storage::{Outcome, PlayerInfo},
    PlayerId, Result,
};

/// Handle the player command
pub fn handle_player(ctx: &CommandContext, player_id: PlayerId) -> Result<()> {
    match ctx.store.fetch_player_info(player_id) {
        Outcome::Found(info) => ctx.emit(&info, || format_player_info(&info)),
        Outcome::NotFound => Err(NbaError::NotFound {
            kind: "Player".to_string(),
            query: player_id.to_string(),
        }),
        Outcome::Failed => Err(NbaError::NoStats {
            player_id: player_id.to_string(),
        }),
    }
}

/// Text rendering of a player with averages.
pub fn format_player_info(info: &PlayerInfo) -> String {
    let player = &info.player;
    let mut out = format!("{} ({})", player.name, player.player_id);

    let team = player.team_name.as_deref().unwrap_or("Free agent");
    let _ = write!(out, "\n{team}");
    if let Some(position) = &player.position {
        let _ = write!(out, " | {position}");
    }
    if let Some(jersey) = &player.jersey {
        let _ = write!(out, " | #{jersey}");
    }

    let _ = write!(
        out,
        "\nCareer ({} games): {:.1} PTS {:.1} REB {:.1} AST",
        info.career_games, info.career.points, info.career.rebounds, info.career.assists
    );

    for row in &info.by_team_season {
        let team = row.team_abbreviation.as_deref().unwrap_or("---");
        let _ = write!(
            out,
            "\n  {} {:<3} {:>3} GP {:>5.1} PTS {:>5.1} REB {:>5.1} AST",
            row.season,
            team,
            row.games_played,
            row.per_game.points,
            row.per_game.rebounds,
            row.per_game.assists
        );
    }
    out
}
