use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;
use crate::provider::{MemoryProvider, SeasonTotals};
use crate::{PlayerId, RecordStore, TeamId};

const LAKERS: u32 = 1610612747;
const LEBRON: u32 = 2544;

async fn test_app() -> (Router, AppState) {
    let provider = Arc::new(MemoryProvider::new());
    provider.add_player(
        PlayerId::new(LEBRON),
        "LeBron James",
        TeamId::new(LAKERS),
        true,
        vec![
            SeasonTotals::new(PlayerId::new(LEBRON), "2019-20", TeamId::new(LAKERS), 10, 200.0, 50.0, 30.0),
            SeasonTotals::new(PlayerId::new(LEBRON), "2020-21", TeamId::new(LAKERS), 5, 80.0, 20.0, 10.0),
        ],
    );
    let store = RecordStore::open_in_memory(provider).unwrap();
    store.create_user("admin", "hunter22", 4).await;

    let state = AppState::new(store);
    (build_router(state.clone(), Duration::from_secs(30)), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value, auth: Option<(&str, &str)>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some((user, pass)) = auth {
        let encoded = STANDARD.encode(format!("{user}:{pass}"));
        builder = builder.header(header::AUTHORIZATION, format!("Basic {encoded}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_search_team() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, get("/search?q=lakers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"kind": "team", "id": LAKERS}));
}

#[tokio::test]
async fn test_search_fetches_player_then_view() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, get("/search?q=lebron%20james")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"kind": "player", "id": LEBRON}));

    let (status, body) = send(&app, get("/players/2544")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player"]["name"], "LeBron James");
    assert_eq!(body["career"]["points"], 18.7);
    assert_eq!(body["by_team_season"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, get(&format!("/teams/{LAKERS}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roster"][0]["name"], "LeBron James");
}

#[tokio::test]
async fn test_search_post_uses_query_string() {
    let (app, _) = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/search?q=LAL")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], LAKERS);
}

#[tokio::test]
async fn test_search_no_match_message() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, get("/search?q=bogus%20player")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Your search bogus player did not match any players or teams!"
    );
}

#[tokio::test]
async fn test_search_blank_query_rejected() {
    let (app, _) = test_app().await;
    let (status, _) = send(&app, get("/search?q=%20%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_ids_not_found() {
    let (app, _) = test_app().await;
    let (status, _) = send(&app, get("/players/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/teams/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login() {
    let (app, _) = test_app().await;

    let ok = json_request("POST", "/login", json!({"username": "admin", "password": "hunter22"}), None);
    let (status, body) = send(&app, ok).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");

    let wrong = json_request("POST", "/login", json!({"username": "admin", "password": "wrongpass"}), None);
    let (status, _) = send(&app, wrong).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let blank = json_request("POST", "/login", json!({"username": "admin", "password": ""}), None);
    let (status, _) = send(&app, blank).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_requires_credentials() {
    let (app, state) = test_app().await;

    let anonymous = json_request("POST", "/admin/players", json!({"name": "LeBron James"}), None);
    let response = app.clone().oneshot(anonymous).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));

    let wrong = json_request(
        "POST",
        "/admin/players",
        json!({"name": "LeBron James"}),
        Some(("admin", "wrongpass")),
    );
    let (status, _) = send(&app, wrong).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(
        state.store().find_player("lebron james"),
        crate::storage::Outcome::NotFound
    );
}

#[tokio::test]
async fn test_admin_add_update_delete() {
    let (app, _) = test_app().await;
    let admin = Some(("admin", "hunter22"));

    let (status, body) = send(
        &app,
        json_request("POST", "/admin/players", json!({"name": "LeBron James"}), admin),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully added LeBron James to database");
    assert_eq!(body["player_id"], LEBRON);

    let (status, body) = send(
        &app,
        json_request("POST", "/admin/players", json!({"name": "LeBron James"}), admin),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Could not add player LeBron James");

    let (status, body) = send(
        &app,
        json_request("PUT", "/admin/players", json!({"name": "LeBron James"}), admin),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully updated LeBron James in database");

    let (status, body) = send(
        &app,
        json_request("DELETE", "/admin/players", json!({"name": "LeBron James"}), admin),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully deleted LeBron James from database");

    let (status, body) = send(
        &app,
        json_request("DELETE", "/admin/players", json!({"name": "LeBron James"}), admin),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Could not delete LeBron James from database");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_admin_blank_name_rejected() {
    let (app, _) = test_app().await;
    let request = json_request(
        "PUT",
        "/admin/players",
        json!({"name": "  "}),
        Some(("admin", "hunter22")),
    );
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Player name is required");
}

#[tokio::test]
async fn test_admin_delete_by_id_when_names_collide() {
    let provider = Arc::new(MemoryProvider::new());
    for id in [101, 102] {
        provider.add_player(
            PlayerId::new(id),
            "Chris Johnson",
            TeamId::new(LAKERS),
            true,
            vec![SeasonTotals::new(PlayerId::new(id), "2015-16", TeamId::new(LAKERS), 5, 10.0, 5.0, 1.0)],
        );
    }
    let store = RecordStore::open_in_memory(provider).unwrap();
    store.create_user("admin", "hunter22", 4).await;
    for id in [101, 102] {
        store
            .insert_player(PlayerId::new(id), "Chris Johnson", TeamId::new(LAKERS))
            .await;
    }
    let state = AppState::new(store);
    let app = build_router(state.clone(), Duration::from_secs(30));
    let admin = Some(("admin", "hunter22"));

    let (status, body) = send(
        &app,
        json_request("DELETE", "/admin/players", json!({"name": "Chris Johnson"}), admin),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Could not delete Chris Johnson from database");
    assert!(state.store().has_player(PlayerId::new(101)));

    let (status, body) = send(&app, json_request("DELETE", "/admin/players/101", json!({}), admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player_id"], 101);
    assert_eq!(body["message"], "Successfully deleted player 101 from database");
    assert!(!state.store().has_player(PlayerId::new(101)));
    assert!(state.store().has_player(PlayerId::new(102)));

    let (status, _) = send(&app, json_request("DELETE", "/admin/players/101", json!({}), admin)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, json_request("DELETE", "/admin/players/102", json!({}), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(state.store().has_player(PlayerId::new(102)));
}

#[tokio::test]
async fn test_admin_username_trimmed_like_login() {
    let (app, _) = test_app().await;
    let padded = Some((" admin ", "hunter22"));

    let login = json_request("POST", "/login", json!({"username": " admin ", "password": "hunter22"}), None);
    let (status, _) = send(&app, login).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request("POST", "/admin/players", json!({"name": "LeBron James"}), padded),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
