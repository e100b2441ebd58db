//! AniLibria API client implementation

use serde::de::DeserializeOwned;

use crate::models::Title;
use crate::{AnilibriaError, Result};

const BASE_URL: &str = "https://api.anilibria.tv/v3";
const MIRROR_URL: &str = "https://anilibria.tv/api/v3";
const STREAM_URL: &str = "https://cache.libria.fun";

pub struct AnilibriaClient {
    client: reqwest::Client,
    base_urls: Vec<String>,
    stream_base: String,
}

impl AnilibriaClient {
    /// Create a new AniLibria client with the default mirror list
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_urls: vec![BASE_URL.to_string(), MIRROR_URL.to_string()],
            stream_base: STREAM_URL.to_string(),
        }
    }

    /// Create a client that tries the given base URLs in order
    pub fn with_base_urls(client: reqwest::Client, base_urls: Vec<String>) -> Self {
        Self {
            client,
            base_urls,
            stream_base: STREAM_URL.to_string(),
        }
    }

    /// Override the stream host used by [`stream_url`](Self::stream_url)
    pub fn stream_base(mut self, base: impl Into<String>) -> Self {
        self.stream_base = base.into();
        self
    }

    /// Fetch a title with its playback data by catalog id
    pub async fn get_title(&self, id: i64) -> Result<Title> {
        self.get_json(&format!("/title?id={}", id)).await
    }

    /// Build an absolute stream URL from a root-relative playlist path
    pub fn stream_url(&self, path: &str) -> String {
        format!("{}{}", self.stream_base, path)
    }

    /// Issue a GET against each configured base URL in order and return
    /// the first successfully parsed response. Any failure, transport or
    /// API level, advances to the next URL; the last error is kept.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let mut last_err = None;
        for base in &self.base_urls {
            let url = format!("{}{}", base, path);
            match self.try_get(&url).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!("AniLibria request to {} failed: {}", url, e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(AnilibriaError::NoBaseUrl))
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnilibriaError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
