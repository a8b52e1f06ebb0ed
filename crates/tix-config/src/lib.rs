//! # tix-config
//!
//! Layered configuration loading for tix using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TIX_*` prefix, `__` as separator)
//! 2. Project-level `.tix/config.toml`
//! 3. User-level `~/.config/tix/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TIX_BOARD__API_KEY` -> `board.api_key`,
//! `TIX_RETRY__BACKOFF_SECS` -> `retry.backoff_secs`, etc.
//!
//! ```no_run
//! use tix_config::TixConfig;
//!
//! let config = TixConfig::load_with_dotenv().expect("config");
//! if config.board.is_configured() {
//!     println!("exporting from {}", config.board.base_url);
//! }
//! ```

mod board;
mod dataservice;
mod error;
mod output;
mod retry;

pub use board::BoardConfig;
pub use dataservice::DataServiceConfig;
pub use error::ConfigError;
pub use output::OutputConfig;
pub use retry::RetryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".tix/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TixConfig {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub dataservice: DataServiceConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl TixConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the retry
    /// settings are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.retry.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit project config file instead of `.tix/config.toml`.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider())
            .extract()?;
        config.retry.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Self::base_figment();

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Self::env_provider())
    }

    /// Defaults plus the user-global file.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }
        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("TIX_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tix").join("config.toml"))
    }
}
