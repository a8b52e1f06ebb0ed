use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List boards visible to the configured token.
    Boards,
    /// List open cards on a board, grouped by list.
    Cards(CardsArgs),
    /// Export every card's list movements to CSV.
    Export(ExportArgs),
    /// Fetch a data-service API to CSV, retrying until it succeeds or the deadline passes.
    Fetch(FetchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CardsArgs {
    /// Board id (defaults to the configured board, else the first board).
    #[arg(long)]
    pub board: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Board id (defaults to the configured board, else the first board).
    #[arg(long)]
    pub board: Option<String>,

    /// CSV destination (defaults to `output.export_path`).
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// API abbreviation, e.g. `mybi_others_rf.weekly_supplier_otif`.
    pub api_abbr: String,

    /// Published API version.
    pub version: String,

    /// CSV destination (defaults to `{output.directory}/{api_abbr}.csv`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override `retry.deadline_secs`.
    #[arg(long)]
    pub deadline_secs: Option<u64>,

    /// Override `retry.backoff_secs`.
    #[arg(long)]
    pub backoff_secs: Option<u64>,
}
