use std::path::Path;

use anyhow::Context;
use tix_board::BoardClient;
use tix_config::TixConfig;
use tix_dataservice::{DataServiceClient, RetryPolicy};

use crate::cli::GlobalFlags;

/// Load `.env` and the layered config, honouring `--config`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TixConfig> {
    let config = match &flags.config {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                anyhow::bail!("config file '{}' does not exist", path.display());
            }
            let _ = dotenvy::dotenv();
            TixConfig::load_from(path)
        }
        None => TixConfig::load_with_dotenv(),
    }
    .context("failed to load tix configuration")?;

    warn_unconfigured(&config);
    Ok(config)
}

pub fn board_client(config: &TixConfig) -> anyhow::Result<BoardClient> {
    let board = config.board.require()?;
    BoardClient::new(&board.base_url, &board.api_key, &board.token)
        .context("failed to build board-service client")
}

pub fn dataservice_client(config: &TixConfig) -> anyhow::Result<DataServiceClient> {
    let ds = config.dataservice.require()?;
    DataServiceClient::new(
        &ds.endpoint,
        &ds.app_key,
        &ds.app_secret,
        &ds.env,
        &ds.query_pattern,
    )
    .context("failed to build data-service client")
}

/// Retry policy from config, with per-run overrides.
pub fn retry_policy(
    config: &TixConfig,
    deadline_secs: Option<u64>,
    backoff_secs: Option<u64>,
) -> anyhow::Result<RetryPolicy> {
    let deadline = deadline_secs.unwrap_or(config.retry.deadline_secs);
    let backoff = backoff_secs.unwrap_or(config.retry.backoff_secs);
    if backoff == 0 {
        anyhow::bail!("--backoff-secs must be at least 1");
    }
    Ok(RetryPolicy::from_secs(deadline, backoff))
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
fn warn_unconfigured(config: &TixConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TixConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mistyped = |prefix: &str| {
        env_keys
            .iter()
            .any(|key| key.starts_with(prefix) && !key.starts_with(&format!("{prefix}__")))
    };

    let mut warnings = Vec::new();

    if !config.board.is_configured() && mistyped("TIX_BOARD") {
        warnings.push(
            "Board config appears default while TIX_BOARD* env vars exist. Use double underscores (example: TIX_BOARD__API_KEY)."
                .to_string(),
        );
    }

    if !config.dataservice.is_configured() && mistyped("TIX_DATASERVICE") {
        warnings.push(
            "Data-service config appears default while TIX_DATASERVICE* env vars exist. Use double underscores (example: TIX_DATASERVICE__APP_KEY)."
                .to_string(),
        );
    }

    warnings
}
