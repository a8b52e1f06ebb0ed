//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("failed to load tix configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Credentials for a service are missing.
    #[error(
        "[{section}] is missing credentials; set {env_hint} or add them to .tix/config.toml"
    )]
    NotConfigured {
        section: &'static str,
        env_hint: &'static str,
    },

    /// A configuration field has an invalid value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
