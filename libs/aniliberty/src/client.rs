//! AniLiberty API client implementation

use serde::de::DeserializeOwned;

use crate::models::{Episode, Release};
use crate::{AnilibertyError, Result};

const BASE_URL: &str = "https://aniliberty.top/api/v1";

/// Maximum number of catalog search results requested per query.
const SEARCH_LIMIT: u32 = 20;

pub struct AnilibertyClient {
    client: reqwest::Client,
    base_urls: Vec<String>,
}

impl AnilibertyClient {
    /// Create a new AniLiberty client with the default base URL
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

    /// Search the release catalog by free-text query
    pub async fn search_releases(&self, query: &str) -> Result<Vec<Release>> {
        let path = format!(
            "/app/search/releases?search={}&limit={}",
            urlencoding::encode(query),
            SEARCH_LIMIT
        );
        self.get_json(&path).await
    }

    /// Fetch a release together with its inline episode list
    pub async fn get_release_with_episodes(&self, id: i64) -> Result<Release> {
        self.get_json(&format!("/anime/releases/{}?include=episodes", id))
            .await
    }

    /// Fetch a single episode's detail by its internal episode id
    pub async fn get_episode(&self, episode_id: &str) -> Result<Episode> {
        self.get_json(&format!(
            "/anime/releases/episodes/{}",
            urlencoding::encode(episode_id)
        ))
        .await
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
                    tracing::warn!("AniLiberty request to {} failed: {}", url, e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(AnilibertyError::NoBaseUrl))
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnilibertyError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
