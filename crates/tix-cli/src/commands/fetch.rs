use std::path::{Path, PathBuf};

use serde::Serialize;
use tix_config::TixConfig;
use tix_dataservice::{Clock, DataServiceApi, ResilientFetcher, SystemClock};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchArgs;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct FetchSummary {
    api_abbr: String,
    version: String,
    rows: usize,
    columns: usize,
    path: PathBuf,
    written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn handle(
    args: &FetchArgs,
    config: &TixConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = bootstrap::dataservice_client(config)?;
    let policy = bootstrap::retry_policy(config, args.deadline_secs, args.backoff_secs)?;
    let path = args.output.as_ref().map_or_else(
        || config.output.fetch_path(&args.api_abbr),
        PathBuf::from,
    );

    let fetcher = ResilientFetcher::new(client, SystemClock, policy)
        .with_queue(config.dataservice.queue.clone());

    let progress = Progress::spinner(&format!("retrieving {}", args.api_abbr));
    let summary = fetch_to_csv(&fetcher, &args.api_abbr, &args.version, &path).await;
    progress.finish_clear();

    output(&summary, flags.format)
}

/// Fetch and write the CSV. A failed write is reported, not raised: the
/// data may have taken hours to retrieve and the summary still says so.
async fn fetch_to_csv<A: DataServiceApi, C: Clock>(
    fetcher: &ResilientFetcher<A, C>,
    api_abbr: &str,
    version: &str,
    path: &Path,
) -> FetchSummary {
    let result = fetcher.fetch(api_abbr, version).await;

    let error = match result.write_csv_to_path(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), rows = result.len(), "fetch output written");
            None
        }
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "failed to write fetch output");
            Some(error.to_string())
        }
    };

    FetchSummary {
        api_abbr: api_abbr.to_string(),
        version: version.to_string(),
        rows: result.len(),
        columns: result.columns().len(),
        path: path.to_path_buf(),
        written: error.is_none(),
        error,
    }
}
