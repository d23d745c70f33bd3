//! Admin commands: add, refresh and delete stored players, create users.
//!
//! The CLI and the web API share [`run_admin_action`] and the flash
//! messages so both surfaces report the same thing.

use serde::Serialize;

use super::common::CommandContext;
use crate::{
    error::NbaError,
    storage::{mutations::DEFAULT_PASSWORD_COST, Outcome},
    PlayerId, QueryResolver, Result,
};

/// Player mutation requested by an admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    Add,
    Update,
    Delete,
}

impl AdminAction {
    pub fn success_message(&self, name: &str) -> String {
        match self {
            AdminAction::Add => format!("Successfully added {name} to database"),
            AdminAction::Update => format!("Successfully updated {name} in database"),
            AdminAction::Delete => format!("Successfully deleted {name} from database"),
        }
    }

    pub fn failure_message(&self, name: &str) -> String {
        match self {
            AdminAction::Add => format!("Could not add player {name}"),
            AdminAction::Update => format!("Could not update {name} in database"),
            AdminAction::Delete => format!("Could not delete {name} from database"),
        }
    }
}

/// Result of an admin action as reported to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminReport {
    pub action: AdminAction,
    pub success: bool,
    pub player_id: Option<PlayerId>,
    pub message: String,
}

impl AdminReport {
    pub fn new(action: AdminAction, name: &str, outcome: &Outcome<PlayerId>) -> Self {
        match outcome {
            Outcome::Found(player_id) => Self {
                action,
                success: true,
                player_id: Some(*player_id),
                message: action.success_message(name),
            },
            Outcome::NotFound | Outcome::Failed => Self {
                action,
                success: false,
                player_id: None,
                message: action.failure_message(name),
            },
        }
    }
}

/// Run one player mutation by name.
pub async fn run_admin_action(
    resolver: &QueryResolver,
    action: AdminAction,
    name: &str,
) -> Outcome<PlayerId> {
    match action {
        AdminAction::Add => resolver.add_player(name).await,
        AdminAction::Update => resolver.store().update_player(name).await,
        AdminAction::Delete => resolver.store().delete_player(name),
    }
}

/// Handle the add-player, update-player and delete-player commands
pub async fn handle_admin(ctx: &CommandContext, action: AdminAction, name: &str) -> Result<()> {
    let name = name.trim();
    // tarpaulin::skip - may call the stats provider, tested via integration tests
    let outcome = run_admin_action(&ctx.resolver, action, name).await;
    let report = AdminReport::new(action, name, &outcome);

    if !report.success {
        return Err(NbaError::CommandFailed(report.message));
    }
    ctx.emit(&report, || report.message.clone())
}

/// Handle `delete-player --id`, the unambiguous form when names collide
pub fn handle_delete_by_id(ctx: &CommandContext, player_id: PlayerId) -> Result<()> {
    let outcome = ctx.store.delete_player_by_id(player_id);
    let report = AdminReport::new(AdminAction::Delete, &format!("player {player_id}"), &outcome);

    if !report.success {
        return Err(NbaError::CommandFailed(report.message));
    }
    ctx.emit(&report, || report.message.clone())
}

/// Handle the add-user command
pub async fn handle_add_user(ctx: &CommandContext, username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(NbaError::CommandFailed(
            "Username and password are required".to_string(),
        ));
    }

    match ctx
        .store
        .create_user(username.trim(), password, DEFAULT_PASSWORD_COST)
        .await
    {
        Outcome::Found(user_id) => {
            let report = serde_json::json!({ "user_id": user_id, "username": username.trim() });
            ctx.emit(&report, || format!("Created user {} ({user_id})", username.trim()))
        }
        Outcome::NotFound | Outcome::Failed => Err(NbaError::CommandFailed(format!(
            "Could not create user {username}"
        ))),
    }
}
