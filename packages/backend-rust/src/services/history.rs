//! HTTP client for the dvmn.org activity history page.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryFetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status} fetching history for {username:?}")]
    Status {
        status: reqwest::StatusCode,
        username: String,
    },
}

/// Fetches raw history pages. Stateless, no caching, no retries: a transport
/// failure surfaces immediately to the caller.
#[derive(Clone)]
pub struct HistoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl HistoryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// `GET {base_url}/user/{username}/history/`.
    ///
    /// A non-2xx status means the user has no visible history; callers treat
    /// it as "user not found".
    pub async fn fetch_history(&self, username: &str) -> Result<String, HistoryFetchError> {
        let url = format!(
            "{}/user/{}/history/",
            self.base_url.trim_end_matches('/'),
            username
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HistoryFetchError::Status {
                status,
                username: username.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
