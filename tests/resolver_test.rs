//! End-to-end resolution against a mocked stats.nba.com

use std::sync::Arc;
use std::time::Duration;

use nba_stats::{
    provider::{NbaStatsClient, ProviderConfig},
    storage::{Outcome, RecordStore},
    PlayerId, QueryResolver, Resolution, Season, TeamId,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const LAKERS: u32 = 1610612747;
const LEBRON: u32 = 2544;

async fn mount_league(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/stats/commonallplayers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [{
                "name": "CommonAllPlayers",
                "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ID"],
                "rowSet": [
                    [977, "Bryant, Kobe", "Kobe Bryant", 0, 0],
                    [LEBRON, "James, LeBron", "LeBron James", 1, LAKERS]
                ]
            }]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stats/commonplayerinfo"))
        .and(query_param("PlayerID", "2544"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [{
                "name": "CommonPlayerInfo",
                "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "JERSEY", "POSITION", "TEAM_ID"],
                "rowSet": [[LEBRON, "LeBron James", "23", "Forward", LAKERS]]
            }]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stats/playercareerstats"))
        .and(query_param("PlayerID", "2544"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [
                {
                    "name": "SeasonTotalsRegularSeason",
                    "headers": ["PLAYER_ID", "SEASON_ID", "TEAM_ID", "GP", "REB", "AST", "PTS"],
                    "rowSet": [
                        [LEBRON, "2019-20", LAKERS, 10, 50, 30, 200],
                        [LEBRON, "2020-21", LAKERS, 5, 20, 10, 80]
                    ]
                },
                {
                    "name": "CareerTotalsRegularSeason",
                    "headers": ["PLAYER_ID", "GP"],
                    "rowSet": [[LEBRON, 15]]
                }
            ]
        })))
        .mount(server)
        .await;
}

fn resolver_for(server: &MockServer) -> QueryResolver {
    let client = NbaStatsClient::new(ProviderConfig {
        base_url: format!("{}/stats", server.uri()),
        season: Season::new(2024),
        user_agent: "nba-stats-test/1.0".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    QueryResolver::new(RecordStore::open_in_memory(Arc::new(client)).unwrap())
}

#[tokio::test]
async fn test_resolve_fetches_player_over_http() {
    let server = MockServer::start().await;
    mount_league(&server).await;
    let resolver = resolver_for(&server);

    assert_eq!(resolver.resolve("LeBron James").await, Resolution::Player(PlayerId::new(LEBRON)));

    let info = resolver.store().fetch_player_info(PlayerId::new(LEBRON)).found().unwrap();
    assert_eq!(info.player.jersey.as_deref(), Some("23"));
    assert_eq!(info.player.position.as_deref(), Some("Forward"));
    assert_eq!(info.career.points, 18.7);
    assert_eq!(info.career.rebounds, 4.7);
    assert_eq!(info.career.assists, 2.7);
}

#[tokio::test]
async fn test_team_resolution_never_calls_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let resolver = resolver_for(&server);

    assert_eq!(resolver.resolve("lakers").await, Resolution::Team(TeamId::new(LAKERS)));
    assert_eq!(resolver.resolve("LAL").await, Resolution::Team(TeamId::new(LAKERS)));
}

#[tokio::test]
async fn test_inactive_and_unknown_players() {
    let server = MockServer::start().await;
    mount_league(&server).await;
    let resolver = resolver_for(&server);

    assert_eq!(resolver.resolve("kobe bryant").await, Resolution::NoMatch);
    assert_eq!(resolver.resolve("bogus player").await, Resolution::NoMatch);
}

#[tokio::test]
async fn test_provider_errors_are_contained() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/commonallplayers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [{
                "name": "CommonAllPlayers",
                "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ID"],
                "rowSet": [[LEBRON, "James, LeBron", "LeBron James", 1, LAKERS]]
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/playercareerstats"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/commonplayerinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let resolver = resolver_for(&server);

    assert_eq!(resolver.resolve("lebron james").await, Resolution::NoMatch);
    assert_eq!(resolver.add_player("lebron james").await, Outcome::Failed);
    assert_eq!(resolver.store().find_player("lebron james"), Outcome::NotFound);
}
