//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_stats::{
    cli::{Commands, NbaStats},
    commands::{
        admin::{handle_add_user, handle_admin, handle_delete_by_id, AdminAction},
        common::{join_words, CommandContext},
        player_data::handle_player,
        search::handle_search,
        serve::handle_serve,
        team_data::handle_team,
    },
    core::init_tracing,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaStats::parse();
    init_tracing(app.global.verbose);

    let ctx = CommandContext::new(&app.global)?;

    match app.command {
        Commands::Serve {
            bind,
            port,
            timeout,
        } => handle_serve(ctx, bind, port, timeout).await?,

        Commands::Search { query } => handle_search(&ctx, &join_words(&query)).await?,

        Commands::Player { id } => handle_player(&ctx, id)?,

        Commands::Team { id } => handle_team(&ctx, id)?,

        Commands::AddPlayer { name } => {
            handle_admin(&ctx, AdminAction::Add, &join_words(&name)).await?
        }

        Commands::UpdatePlayer { name } => {
            handle_admin(&ctx, AdminAction::Update, &join_words(&name)).await?
        }

        Commands::DeletePlayer { id: Some(id), .. } => handle_delete_by_id(&ctx, id)?,

        Commands::DeletePlayer { id: None, name } => {
            handle_admin(&ctx, AdminAction::Delete, &join_words(&name)).await?
        }

        Commands::AddUser { username, password } => {
            handle_add_user(&ctx, &username, &password).await?
        }
    }

    Ok(())
}
