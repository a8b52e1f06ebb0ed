use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tix_board::BoardApi;
use tix_config::TixConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::output::output;
use crate::pipeline;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ExportSummary {
    board: String,
    path: PathBuf,
    lists: usize,
    cards: usize,
    rows: usize,
}

pub async fn handle(
    args: &ExportArgs,
    config: &TixConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = bootstrap::board_client(config)?;
    let pinned = args.board.as_deref().or_else(|| config.board.pinned_board());
    let path = args
        .output
        .as_ref()
        .map_or_else(|| config.output.export_path().to_path_buf(), PathBuf::from);

    let summary = export_to_csv(&client, pinned, &path).await?;
    output(&summary, flags.format)
}

async fn export_to_csv<A: BoardApi>(
    api: &A,
    pinned: Option<&str>,
    path: &Path,
) -> anyhow::Result<ExportSummary> {
    let board = api
        .resolve_board(pinned)
        .await
        .context("failed to resolve board")?;

    let progress = Progress::bar(0, &board.name);
    let export = match pipeline::export_board(api, &board, &progress).await {
        Ok(export) => {
            progress.finish_clear();
            export
        }
        Err(error) => {
            progress.finish_err("export failed");
            return Err(error);
        }
    };

    tix_core::export::write_rows_to_path(path, &export.rows)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = export.rows.len(), "export written");

    Ok(ExportSummary {
        board: board.name,
        path: path.to_path_buf(),
        lists: export.lists,
        cards: export.cards,
        rows: export.rows.len(),
    })
}
