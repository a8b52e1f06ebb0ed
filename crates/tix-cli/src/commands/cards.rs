use anyhow::Context;
use tix_board::BoardApi;
use tix_config::TixConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::CardsArgs;
use crate::output::output;
use crate::pipeline;

pub async fn handle(
    args: &CardsArgs,
    config: &TixConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = bootstrap::board_client(config)?;
    let pinned = args.board.as_deref().or_else(|| config.board.pinned_board());
    let board = client
        .resolve_board(pinned)
        .await
        .context("failed to resolve board")?;

    let cards = pipeline::list_open_cards(&client, &board).await?;
    output(&cards, flags.format)
}
