//! Shared HTTP client construction

use std::time::Duration;

use reqwest::Client;

/// Client identity presented to upstream services. Some mirrors reject
/// requests without a browser-looking user agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Owns the two client profiles the service needs: a bounded API client
/// for provider calls and a relay client without a total timeout so
/// large media bodies are not cut off mid-transfer.
pub struct HttpClientService {
    api: Client,
    relay: Client,
}

impl HttpClientService {
    pub fn new(request_timeout: Duration) -> Result<Self, HttpClientError> {
        let api = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let relay = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self { api, relay })
    }

    /// Client for provider API calls (bounded total timeout)
    pub fn api_client(&self) -> Client {
        self.api.clone()
    }

    /// Client for media relaying (connect timeout only)
    pub fn relay_client(&self) -> Client {
        self.relay.clone()
    }
}
