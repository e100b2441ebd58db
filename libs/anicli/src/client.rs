//! anicli bridge client implementation

use serde::de::DeserializeOwned;

use crate::models::{QualitiesPayload, VideoLink};
use crate::{AnicliError, Result};

const BASE_URL: &str = "http://localhost:8000";

pub struct AnicliClient {
    client: reqwest::Client,
    base_urls: Vec<String>,
}

impl AnicliClient {
    /// Create a new bridge client pointing at the default local bridge
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_urls: vec![BASE_URL.to_string()],
        }
    }

    /// Create a client that tries the given base URLs in order
    pub fn with_base_urls(client: reqwest::Client, base_urls: Vec<String>) -> Self {
        Self { client, base_urls }
    }

    /// Fetch the single best video link for an episode
    pub async fn get_video(&self, anime_id: i64, episode: i64) -> Result<VideoLink> {
        self.get_json(&format!(
            "/get-anime-video?anime_id={}&episode={}",
            anime_id, episode
        ))
        .await
    }

    /// Fetch all quality tiers the bridge can offer for an episode
    pub async fn get_qualities(&self, anime_id: i64, episode: i64) -> Result<QualitiesPayload> {
        self.get_json(&format!(
            "/get-qualities?anime_id={}&episode={}",
            anime_id, episode
        ))
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let mut last_err = None;
        for base in &self.base_urls {
            let url = format!("{}{}", base, path);
            match self.try_get(&url).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!("anicli bridge request to {} failed: {}", url, e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(AnicliError::NoBaseUrl))
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnicliError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
