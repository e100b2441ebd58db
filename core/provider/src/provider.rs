//! Video provider trait definition

use async_trait::async_trait;

use crate::{ProviderError, QualitySet};

/// Unified episode stream provider interface
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Resolve a playable stream URL for the episode.
    ///
    /// Returns `Ok(None)` when the source answered but has no stream
    /// for this episode.
    async fn resolve_video(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<Option<String>, ProviderError>;

    /// Resolve all advertised quality tiers for the episode.
    ///
    /// Tiers the source does not offer stay `None`; a source offering
    /// nothing at all yields `Ok(None)` rather than an empty set.
    async fn resolve_qualities(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<Option<QualitySet>, ProviderError>;

    /// Provider name for logging and provenance
    fn name(&self) -> &'static str;
}
