//! AniLibria video provider adapter

use std::sync::Arc;

use anilibria::{AnilibriaClient, Hls};
use async_trait::async_trait;

use crate::{ProviderError, QualitySet, VideoProvider};

/// AniLibria v3 API provider, the mirror-backed fallback source
pub struct AnilibriaProvider {
    client: Arc<AnilibriaClient>,
}

impl AnilibriaProvider {
    pub fn new(client: Arc<AnilibriaClient>) -> Self {
        Self { client }
    }

    /// Create a provider backed by a bare HTTP client and default mirrors
    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(AnilibriaClient::new(http_client)),
        }
    }

    /// Fetch the HLS block for the episode. Episodes are keyed by their
    /// textual ordinal in the title's player list.
    async fn episode_hls(&self, anime_id: i64, episode: i64) -> Result<Option<Hls>, ProviderError> {
        let title = match self.client.get_title(anime_id).await {
            Ok(title) => title,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let Some(player) = title.player else {
            return Ok(None);
        };
        Ok(player
            .list
            .get(&episode.to_string())
            .and_then(|ep| ep.hls.clone()))
    }

    /// Turn root-relative playlist paths into absolute stream URLs
    fn stream_qualities(&self, hls: &Hls) -> QualitySet {
        QualitySet {
            fhd: hls.fhd.as_deref().map(|p| self.client.stream_url(p)),
            hd: hls.hd.as_deref().map(|p| self.client.stream_url(p)),
            sd: hls.sd.as_deref().map(|p| self.client.stream_url(p)),
        }
    }
}

#[async_trait]
impl VideoProvider for AnilibriaProvider {
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
        let Some(hls) = self.episode_hls(anime_id, episode).await? else {
            return Ok(None);
        };
        let qualities = self.stream_qualities(&hls);
        if qualities.is_empty() {
            return Ok(None);
        }
        Ok(Some(qualities))
    }

    fn name(&self) -> &'static str {
        "anilibria"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_url_prefixing() {
        let provider = AnilibriaProvider::with_http_client(reqwest::Client::new());
        let title: anilibria::Title = serde_json::from_str(
            r#"{"id": 42, "player": {"list": {"3": {"episode": 3, "hls": {"fhd": "/stream/42/3.m3u8"}}}}}"#,
        )
        .unwrap();

        let hls = title
            .player
            .unwrap()
            .list
            .get("3")
            .unwrap()
            .hls
            .clone()
            .unwrap();
        let qualities = provider.stream_qualities(&hls);

        assert_eq!(
            qualities.fhd.as_deref(),
            Some("https://cache.libria.fun/stream/42/3.m3u8")
        );
        assert!(qualities.hd.is_none());
        assert!(qualities.sd.is_none());
    }
}
