//! Team view command implementation

use super::common::CommandContext;
use crate::{
    error::NbaError,
    storage::{Outcome, TeamInfo},
    Result, TeamId,
};

/// Handle the team command
pub fn handle_team(ctx: &CommandContext, team_id: TeamId) -> Result<()> {
    match ctx.store.fetch_team_info(team_id) {
        Outcome::Found(info) => ctx.emit(&info, || format_team_info(&info)),
        Outcome::NotFound | Outcome::Failed => Err(NbaError::NotFound {
            kind: "Team".to_string(),
            query: team_id.to_string(),
        }),
    }
}

/// Text rendering of a team and its stored roster.
pub fn format_team_info(info: &TeamInfo) -> String {
    let mut lines = vec![format!(
        "{} ({}) [{}]",
        info.team.name(),
        info.team.abbreviation,
        info.team.team_id
    )];

    if info.roster.is_empty() {
        lines.push("No stored players".to_string());
    }
    lines.extend(
        info.roster
            .iter()
            .map(|entry| format!("  {} {}", entry.player_id, entry.name)),
    );
    lines.join("\n")
}
