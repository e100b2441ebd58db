//! Legacy anicli bridge provider adapter

use std::sync::Arc;

use anicli::{AnicliClient, QualityLinks};
use async_trait::async_trait;

use crate::{ProviderError, QualitySet, VideoProvider};

/// Legacy bridge provider, the last-resort source
pub struct AnicliProvider {
    client: Arc<AnicliClient>,
}

impl AnicliProvider {
    pub fn new(client: Arc<AnicliClient>) -> Self {
        Self { client }
    }

    /// Create a provider backed by a bare HTTP client and the local bridge
    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(AnicliClient::new(http_client)),
        }
    }
}

fn links_to_set(links: QualityLinks) -> QualitySet {
    QualitySet {
        fhd: links.fhd,
        hd: links.hd,
        sd: links.sd,
    }
}

#[async_trait]
impl VideoProvider for AnicliProvider {
    async fn resolve_video(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<Option<String>, ProviderError> {
        let link = match self.client.get_video(anime_id, episode).await {
            Ok(link) => link,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(link.url.filter(|url| !url.is_empty()))
    }

    async fn resolve_qualities(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<Option<QualitySet>, ProviderError> {
        let payload = match self.client.get_qualities(anime_id, episode).await {
            Ok(payload) => payload,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let qualities = links_to_set(payload.qualities);
        if qualities.is_empty() {
            return Ok(None);
        }
        Ok(Some(qualities))
    }

    fn name(&self) -> &'static str {
        "anicli"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tier_bridge_payload() {
        let payload: anicli::QualitiesPayload =
            serde_json::from_str(r#"{"qualities": {"sd": "https://legacy.example/42/3_480.mp4"}}"#)
                .unwrap();
        let qualities = links_to_set(payload.qualities);

        // Only the tier the bridge offered is present
        assert!(qualities.fhd.is_none());
        assert!(qualities.hd.is_none());
        assert_eq!(
            qualities.preferred(),
            Some("https://legacy.example/42/3_480.mp4")
        );

        let empty: anicli::QualitiesPayload = serde_json::from_str(r#"{"qualities": {}}"#).unwrap();
        assert!(links_to_set(empty.qualities).is_empty());
    }
}
