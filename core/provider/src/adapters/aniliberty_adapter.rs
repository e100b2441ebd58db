//! AniLiberty video provider adapter

use std::sync::Arc;

use aniliberty::{AnilibertyClient, Episode};
use async_trait::async_trait;

use crate::{ProviderError, QualitySet, VideoProvider};

/// AniLiberty v1 API provider, the primary source
pub struct AnilibertyProvider {
    client: Arc<AnilibertyClient>,
}

impl AnilibertyProvider {
    pub fn new(client: Arc<AnilibertyClient>) -> Self {
        Self { client }
    }

    /// Create a provider backed by a bare HTTP client and default base URL
    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(AnilibertyClient::new(http_client)),
        }
    }

    /// Locate the episode row for `(anime_id, episode)`.
    ///
    /// The catalog is searched with the anime id as the query; an exact
    /// id match is preferred over the first hit. The matched release's
    /// inline episode list is scanned by ordinal, and rows that carry no
    /// stream URLs fall back to the per-episode detail lookup.
    async fn find_episode(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<Option<Episode>, ProviderError> {
        let results = self.client.search_releases(&anime_id.to_string()).await?;
        let Some(release_id) = results
            .iter()
            .find(|r| r.id == anime_id)
            .or_else(|| results.first())
            .map(|r| r.id)
        else {
            return Ok(None);
        };

        let release = match self.client.get_release_with_episodes(release_id).await {
            Ok(release) => release,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let Some(row) = release
            .episodes
            .unwrap_or_default()
            .into_iter()
            .find(|ep| ep.ordinal == episode as f64)
        else {
            return Ok(None);
        };

        if row.has_streams() {
            return Ok(Some(row));
        }

        // Inline row carries no URLs; ask for the full episode detail.
        match self.client.get_episode(&row.id).await {
            Ok(detail) => Ok(Some(detail)),
            Err(e) if e.is_not_found() => Ok(Some(row)),
            Err(e) => Err(e.into()),
        }
    }
}

fn qualities_of(episode: &Episode) -> QualitySet {
    QualitySet {
        fhd: episode.hls_1080.clone(),
        hd: episode.hls_720.clone(),
        sd: episode.hls_480.clone(),
    }
}

#[async_trait]
impl VideoProvider for AnilibertyProvider {
    async fn resolve_video(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<Option<String>, ProviderError> {
        Ok(self
            .resolve_qualities(anime_id, episode)
            .await?
            .and_then(|q| q.preferred().map(str::to_string)))
    }

    async fn resolve_qualities(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<Option<QualitySet>, ProviderError> {
        let Some(row) = self.find_episode(anime_id, episode).await? else {
            return Ok(None);
        };
        let qualities = qualities_of(&row);
        if qualities.is_empty() {
            return Ok(None);
        }
        Ok(Some(qualities))
    }

    fn name(&self) -> &'static str {
        "aniliberty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualities_mapping() {
        let row: Episode = serde_json::from_str(
            r#"{
                "id": "ep-3",
                "ordinal": 3,
                "hls_1080": "https://cache.aniliberty.top/videos/3/1080.m3u8",
                "hls_480": "https://cache.aniliberty.top/videos/3/480.m3u8"
            }"#,
        )
        .unwrap();
        let qualities = qualities_of(&row);
        assert_eq!(
            qualities.fhd.as_deref(),
            Some("https://cache.aniliberty.top/videos/3/1080.m3u8")
        );
        assert!(qualities.hd.is_none());
        assert_eq!(
            qualities.preferred(),
            Some("https://cache.aniliberty.top/videos/3/1080.m3u8")
        );

        // Rows without any stream URL map to an empty set
        let bare: Episode = serde_json::from_str(r#"{"id": "ep-4", "ordinal": 4}"#).unwrap();
        assert!(qualities_of(&bare).is_empty());
    }
}
