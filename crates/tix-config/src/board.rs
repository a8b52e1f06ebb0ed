//! Board-service credentials and scope.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default board-service REST endpoint.
fn default_base_url() -> String {
    String::from("https://api.trello.com/1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Developer API key (from the board service's app-key page).
    #[serde(default)]
    pub api_key: String,

    /// User token authorizing read access to the boards.
    #[serde(default)]
    pub token: String,

    /// REST endpoint, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Board to export. Empty means the first board the token can see.
    #[serde(default)]
    pub board_id: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            token: String::new(),
            base_url: default_base_url(),
            board_id: String::new(),
        }
    }
}

impl BoardConfig {
    /// Both credentials are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.token.is_empty()
    }

    /// The configured board id, if one was pinned.
    #[must_use]
    pub fn pinned_board(&self) -> Option<&str> {
        (!self.board_id.is_empty()).then_some(self.board_id.as_str())
    }

    /// Fail unless credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the key or token is empty.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "board",
                env_hint: "TIX_BOARD__API_KEY and TIX_BOARD__TOKEN",
            })
        }
    }
}
