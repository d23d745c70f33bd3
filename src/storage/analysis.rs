//! Per-game average computation over stored season rows

use super::models::{PerGame, SeasonStat, TeamSeasonAverage};

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Per-game averages for the given totals, or `None` when no games were played.
pub fn per_game(points: f64, rebounds: f64, assists: f64, games: u32) -> Option<PerGame> {
    if games == 0 {
        return None;
    }
    let games = f64::from(games);
    Some(PerGame {
        points: round1(points / games),
        rebounds: round1(rebounds / games),
        assists: round1(assists / games),
    })
}

/// Career and per-team-season averages.
///
/// Multi-team aggregate rows (team 0) are skipped. The career figure divides
/// summed totals by summed games, so a 10-game stint and a 70-game stint are
/// weighted by games, not averaged row by row. A zero-game row is listed
/// with zero averages.
///
/// Returns `None` when there are no usable rows or no games at all.
pub fn career_averages(rows: &[SeasonStat]) -> Option<(PerGame, u32, Vec<TeamSeasonAverage>)> {
    let mut total_games = 0u32;
    let mut total_points = 0.0;
    let mut total_rebounds = 0.0;
    let mut total_assists = 0.0;
    let mut by_team_season = Vec::new();

    for row in rows.iter().filter(|row| !row.team_id.is_aggregate()) {
        total_games += row.games_played;
        total_points += row.points;
        total_rebounds += row.rebounds;
        total_assists += row.assists;

        let averages = per_game(row.points, row.rebounds, row.assists, row.games_played)
            .unwrap_or(PerGame {
                points: 0.0,
                rebounds: 0.0,
                assists: 0.0,
            });

        by_team_season.push(TeamSeasonAverage {
            season: row.season.clone(),
            team_id: row.team_id,
            team_abbreviation: row.team_abbreviation.clone(),
            games_played: row.games_played,
            per_game: averages,
        });
    }

    let career = per_game(total_points, total_rebounds, total_assists, total_games)?;
    Some((career, total_games, by_team_season))
}
