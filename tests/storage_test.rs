//! Record store tests against an on-disk database

mod common;

use common::*;
use nba_stats::{storage::*, PlayerId, QueryResolver, Resolution, TeamId};
use tempfile::TempDir;

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("nba.db");
    let provider = league_provider();

    {
        let store = RecordStore::open(&db_path, provider.clone()).unwrap();
        let resolver = QueryResolver::new(store.clone());
        assert_eq!(
            resolver.resolve("lebron james").await,
            Resolution::Player(PlayerId::new(LEBRON))
        );
        assert!(store.create_user("admin", "hunter22", 4).await.is_found());
    }

    // Reopening must not re-seed teams or lose rows; the provider is offline.
    provider.set_unavailable(true);
    let store = RecordStore::open(&db_path, provider).unwrap();

    assert_eq!(store.find_player("lebron james"), Outcome::Found(PlayerId::new(LEBRON)));
    let info = store.fetch_player_info(PlayerId::new(LEBRON)).found().unwrap();
    assert_eq!(info.career.points, 18.7);
    assert_eq!(info.career_games, 15);

    let team = store.fetch_team_info(TeamId::new(LAKERS)).found().unwrap();
    assert_eq!(team.roster.len(), 1);

    assert!(store.authenticate_user("admin", "hunter22").await.is_found());
    assert_eq!(store.authenticate_user("admin", "wrongpass").await, Outcome::NotFound);
}

#[test]
fn test_open_fails_on_unusable_path() {
    let dir = TempDir::new().unwrap();
    // A directory where the database file should be.
    let result = RecordStore::open(dir.path(), league_provider());

    match result {
        Err(nba_stats::NbaError::Connection { path, .. }) => {
            assert_eq!(path, dir.path().display().to_string());
        }
        Err(other) => panic!("Expected Connection error, got {other}"),
        Ok(_) => panic!("Opening a directory as a database should fail"),
    }
}

#[tokio::test]
async fn test_traded_season_and_refresh() {
    let dir = TempDir::new().unwrap();
    let provider = league_provider();
    let store = RecordStore::open(dir.path().join("nba.db"), provider.clone()).unwrap();

    store
        .insert_player(PlayerId::new(LEBRON), "LeBron James", TeamId::new(LAKERS))
        .await;

    // Mid-season trade: two team rows plus the provider's aggregate.
    provider.set_totals(
        PlayerId::new(LEBRON),
        vec![
            season(LEBRON, "2019-20", LAKERS, 10, 200.0, 50.0, 30.0),
            season(LEBRON, "2020-21", LAKERS, 5, 80.0, 20.0, 10.0),
            season(LEBRON, "2021-22", LAKERS, 3, 60.0, 9.0, 6.0),
            season(LEBRON, "2021-22", 0, 5, 100.0, 15.0, 10.0),
            season(LEBRON, "2021-22", CAVS, 2, 40.0, 6.0, 4.0),
        ],
    );

    assert!(store.update_player("LeBron James").await.is_found());
    assert!(store.update_player("LeBron James").await.is_found());

    let info = store.fetch_player_info(PlayerId::new(LEBRON)).found().unwrap();
    assert_eq!(info.by_team_season.len(), 4);
    assert!(info.by_team_season.iter().all(|row| !row.team_id.is_aggregate()));
    assert_eq!(info.career_games, 20);
    // (200 + 80 + 60 + 40) / 20
    assert_eq!(info.career.points, 19.0);
}
