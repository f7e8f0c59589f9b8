// src/llm/http_client.rs
// Shared HTTP client for the generation endpoint (single attempt, no retry)

use crate::error::{MotivatorError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Connect timeout; the request itself uses the client default (none)
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the shared HTTP client
pub fn create_shared_client() -> Client {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub struct LlmHttpClient {
    client: Client,
}

impl LlmHttpClient {
    pub fn new() -> Self {
        Self::from_client(create_shared_client())
    }

    /// Create from an existing reqwest::Client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Send one request built by `build_request` and return the body text.
    ///
    /// Transport failures and non-success statuses both become
    /// `MotivatorError::Generation`; nothing is retried.
    pub async fn execute_request<F>(
        &self,
        request_id: &str,
        body: String,
        build_request: F,
    ) -> Result<String>
    where
        F: FnOnce(&Client, String) -> reqwest::RequestBuilder,
    {
        let response = build_request(&self.client, body)
            .send()
            .await
            .map_err(|e| {
                warn!(request_id = %request_id, error = %e, "Request failed");
                MotivatorError::Generation(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = %status,
                error = %error_body,
                "API returned error status"
            );
            return Err(MotivatorError::Generation(format!(
                "API error {}: {}",
                status, error_body
            )));
        }

        response
            .text()
            .await
            .map_err(|e| MotivatorError::Generation(format!("failed to read response body: {}", e)))
    }
}

impl Default for LlmHttpClient {
    fn default() -> Self {
        Self::new()
    }
}
