//! HTTP client for the analytics data service.

use serde::Serialize;
use serde_json::Value;

use crate::{DataServiceApi, RequestBody, error::DataServiceError};

const APP_KEY_HEADER: &str = "X-App-Key";
const APP_SECRET_HEADER: &str = "X-App-Secret";
const ENV_HEADER: &str = "X-Env";
const QUERY_PATTERN_HEADER: &str = "X-Query-Pattern";

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Serialize)]
struct CallEnvelope<'a> {
    queue: &'a str,
    body: &'a RequestBody,
}

/// Authenticated client for one data-service app.
pub struct DataServiceClient {
    http: reqwest::Client,
    endpoint: String,
    app_key: String,
    app_secret: String,
    env: String,
    query_pattern: String,
}

impl DataServiceClient {
    /// Create a client for `endpoint` with the app's credentials.
    ///
    /// # Errors
    ///
    /// Returns [`DataServiceError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(
        endpoint: impl Into<String>,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        env: impl Into<String>,
        query_pattern: impl Into<String>,
    ) -> Result<Self, DataServiceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tix/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            env: env.into(),
            query_pattern: query_pattern.into(),
        })
    }

    fn call_url(&self, api_abbr: &str, version: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.endpoint,
            urlencoding::encode(api_abbr),
            urlencoding::encode(version)
        )
    }
}

impl DataServiceApi for DataServiceClient {
    async fn call(
        &self,
        api_abbr: &str,
        version: &str,
        queue: &str,
        body: &RequestBody,
    ) -> Result<Value, DataServiceError> {
        let url = self.call_url(api_abbr, version);
        tracing::debug!(api_abbr, version, "data service request");

        let resp = self
            .http
            .post(url)
            .header(APP_KEY_HEADER, &self.app_key)
            .header(APP_SECRET_HEADER, &self.app_secret)
            .header(ENV_HEADER, &self.env)
            .header(QUERY_PATTERN_HEADER, &self.query_pattern)
            .json(&CallEnvelope { queue, body })
            .send()
            .await?;

        let resp = check_response(resp).await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, DataServiceError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return Err(DataServiceError::RateLimited { retry_after_secs });
    }

    let message = resp.text().await.unwrap_or_default();
    Err(DataServiceError::Api {
        status: status.as_u16(),
        message,
    })
}
