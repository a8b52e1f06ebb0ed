//! Analytics data-service credentials.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_env() -> String {
    String::from("live")
}

fn default_query_pattern() -> String {
    String::from("olap")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataServiceConfig {
    /// Application key issued by the data service.
    #[serde(default)]
    pub app_key: String,

    /// Application secret paired with `app_key`.
    #[serde(default)]
    pub app_secret: String,

    /// Service endpoint, without a trailing slash.
    #[serde(default)]
    pub endpoint: String,

    /// Deployment environment (`live`, `test`).
    #[serde(default = "default_env")]
    pub env: String,

    /// Query engine hint (`olap`, `oltp`).
    #[serde(default = "default_query_pattern")]
    pub query_pattern: String,

    /// Execution queue; empty selects the service default.
    #[serde(default)]
    pub queue: String,
}

impl Default for DataServiceConfig {
    fn default() -> Self {
        Self {
            app_key: String::new(),
            app_secret: String::new(),
            endpoint: String::new(),
            env: default_env(),
            query_pattern: default_query_pattern(),
            queue: String::new(),
        }
    }
}

impl DataServiceConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.app_key.is_empty() && !self.app_secret.is_empty() && !self.endpoint.is_empty()
    }

    /// Fail unless key, secret and endpoint are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when any of them is empty.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "dataservice",
                env_hint: "TIX_DATASERVICE__APP_KEY, TIX_DATASERVICE__APP_SECRET and TIX_DATASERVICE__ENDPOINT",
            })
        }
    }
}
