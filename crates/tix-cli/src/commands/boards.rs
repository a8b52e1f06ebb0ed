use anyhow::Context;
use serde::Serialize;
use tix_board::BoardApi;
use tix_config::TixConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct BoardLine {
    name: String,
    id: String,
    closed: bool,
}

pub async fn handle(config: &TixConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = bootstrap::board_client(config)?;
    let boards = client.boards().await.context("failed to list boards")?;

    let lines = boards
        .into_iter()
        .map(|board| BoardLine {
            name: board.name,
            id: board.id,
            closed: board.closed,
        })
        .collect::<Vec<_>>();

    output(&lines, flags.format)
}
