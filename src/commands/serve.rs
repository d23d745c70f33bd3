//! Serve command implementation

use std::time::Duration;

use super::common::CommandContext;
use crate::{
    web::{self, AppState, ServerConfig},
    Result,
};

/// Handle the serve command
pub async fn handle_serve(ctx: CommandContext, bind: String, port: u16, timeout: u64) -> Result<()> {
    let config = ServerConfig {
        bind,
        port,
        timeout: Duration::from_secs(timeout),
    };
    // tarpaulin::skip - runs until shutdown
    web::serve(AppState::new(ctx.store), config).await
}
