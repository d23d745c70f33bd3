//! Route handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::auth::AdminUser;
use super::error::{require, ApiError, ApiResult};
use super::state::AppState;
use crate::commands::admin::{run_admin_action, AdminAction, AdminReport};
use crate::commands::search::no_match_message;
use crate::storage::{Outcome, PlayerInfo, TeamInfo, UserRecord};
use crate::{PlayerId, Resolution, TeamId};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct PlayerNameRequest {
    #[serde(default)]
    pub name: String,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.uptime_seconds(),
    }))
}

/// GET|POST /search?q= - Resolve free text to a team or player
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Resolution>> {
    require("Search query", &params.q)?;

    match state.resolver().resolve(&params.q).await {
        Resolution::NoMatch => Err(ApiError::NotFound(no_match_message(params.q.trim()))),
        resolution => Ok(Json(resolution)),
    }
}

/// GET /teams/{id} - Team with its stored roster
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<TeamInfo>> {
    match state.store().fetch_team_info(TeamId::new(id)) {
        Outcome::Found(info) => Ok(Json(info)),
        Outcome::NotFound | Outcome::Failed => {
            Err(ApiError::NotFound(format!("Team {id} not found")))
        }
    }
}

/// GET /players/{id} - Player with career and per-team-season averages
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<PlayerInfo>> {
    match state.store().fetch_player_info(PlayerId::new(id)) {
        Outcome::Found(info) => Ok(Json(info)),
        Outcome::NotFound => Err(ApiError::NotFound(format!("Player {id} not found"))),
        Outcome::Failed => Err(ApiError::Unprocessable(format!(
            "No games recorded for player {id}"
        ))),
    }
}

/// POST /login - Check credentials
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<UserRecord>> {
    require("Username", &req.username)?;
    require("Password", &req.password)?;

    match state.store().authenticate_user(req.username.trim(), &req.password).await {
        Outcome::Found(user) => {
            info!(user_id = %user.user_id, username = %user.username, "User logged in");
            Ok(Json(user))
        }
        Outcome::NotFound | Outcome::Failed => Err(ApiError::Unauthorized),
    }
}

/// POST /admin/players - Fetch a player from the provider and store them
pub async fn add_player(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<PlayerNameRequest>,
) -> ApiResult<(StatusCode, Json<AdminReport>)> {
    admin_action(&state, admin, AdminAction::Add, &req.name).await
}

/// PUT /admin/players - Refresh a stored player from the provider
pub async fn update_player(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<PlayerNameRequest>,
) -> ApiResult<(StatusCode, Json<AdminReport>)> {
    admin_action(&state, admin, AdminAction::Update, &req.name).await
}

/// DELETE /admin/players - Remove a stored player
pub async fn delete_player(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<PlayerNameRequest>,
) -> ApiResult<(StatusCode, Json<AdminReport>)> {
    admin_action(&state, admin, AdminAction::Delete, &req.name).await
}

/// DELETE /admin/players/{id} - Remove a stored player by id
pub async fn delete_player_by_id(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<u32>,
) -> (StatusCode, Json<AdminReport>) {
    let player_id = PlayerId::new(id);
    let outcome = state.store().delete_player_by_id(player_id);
    info!(admin = %admin.username, %player_id, ?outcome, "Admin delete by id");

    admin_response(AdminAction::Delete, &format!("player {player_id}"), &outcome)
}

async fn admin_action(
    state: &AppState,
    AdminUser(admin): AdminUser,
    action: AdminAction,
    name: &str,
) -> ApiResult<(StatusCode, Json<AdminReport>)> {
    require("Player name", name)?;
    let name = name.trim();

    let outcome = run_admin_action(state.resolver(), action, name).await;
    info!(admin = %admin.username, ?action, player = %name, ?outcome, "Admin action");

    Ok(admin_response(action, name, &outcome))
}

fn admin_response(
    action: AdminAction,
    label: &str,
    outcome: &Outcome<PlayerId>,
) -> (StatusCode, Json<AdminReport>) {
    let status = match outcome {
        Outcome::Found(_) => StatusCode::OK,
        Outcome::NotFound => StatusCode::NOT_FOUND,
        Outcome::Failed => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(AdminReport::new(action, label, outcome)))
}
