//! Resolution orchestrator: ordered provider fallback with caching

use std::sync::Arc;

use provider::{QualitySet, VideoProvider};

use crate::services::cache::{CacheKey, CachePayload, CacheService, CachedResolution};

/// Resolution failures surfaced to the HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Every configured provider was attempted and none produced a result
    #[error("no provider could resolve episode {episode} of anime {anime_id}")]
    Exhausted { anime_id: i64, episode: i64 },
}

/// A resolved stream URL plus the provider that produced it
#[derive(Debug, Clone)]
pub struct ResolvedVideo {
    pub url: String,
    pub source: &'static str,
}

/// A resolved quality listing plus the provider that produced it
#[derive(Debug, Clone)]
pub struct ResolvedQualities {
    pub qualities: QualitySet,
    pub source: &'static str,
}

/// Walks providers in a fixed order until one resolves the episode.
///
/// Providers are attempted strictly in the order given at construction;
/// the first success wins and is written through to the cache. A
/// provider error and an empty answer both advance the chain, they only
/// differ in how they are logged. Nothing is cached for failed lookups,
/// so a later request retries the full chain.
pub struct ResolverService {
    cache: Arc<CacheService>,
    providers: Vec<Arc<dyn VideoProvider>>,
}

impl ResolverService {
    pub fn new(cache: Arc<CacheService>, providers: Vec<Arc<dyn VideoProvider>>) -> Self {
        Self { cache, providers }
    }

    /// Resolve a playable URL for the episode
    pub async fn resolve_video(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<ResolvedVideo, ResolveError> {
        let key = CacheKey::Video { anime_id, episode };
        if let Some(cached) = self.cache.get(&key) {
            if let CachePayload::Url(url) = cached.payload {
                tracing::debug!(
                    "Cache hit for video {}:{} (source: {})",
                    anime_id,
                    episode,
                    cached.source
                );
                return Ok(ResolvedVideo {
                    url,
                    source: cached.source,
                });
            }
        }

        for provider in &self.providers {
            match provider.resolve_video(anime_id, episode).await {
                Ok(Some(url)) => {
                    tracing::info!(
                        "Resolved video for {}:{} via {}",
                        anime_id,
                        episode,
                        provider.name()
                    );
                    self.cache.set(
                        &key,
                        CachedResolution {
                            payload: CachePayload::Url(url.clone()),
                            source: provider.name(),
                        },
                    );
                    return Ok(ResolvedVideo {
                        url,
                        source: provider.name(),
                    });
                }
                Ok(None) => {
                    tracing::debug!(
                        "Provider {} has no video for {}:{}, trying next",
                        provider.name(),
                        anime_id,
                        episode
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Provider {} failed for {}:{}: {}",
                        provider.name(),
                        anime_id,
                        episode,
                        e
                    );
                }
            }
        }

        Err(ResolveError::Exhausted { anime_id, episode })
    }

    /// Resolve the advertised quality tiers for the episode
    pub async fn resolve_qualities(
        &self,
        anime_id: i64,
        episode: i64,
    ) -> Result<ResolvedQualities, ResolveError> {
        let key = CacheKey::Qualities { anime_id, episode };
        if let Some(cached) = self.cache.get(&key) {
            if let CachePayload::Qualities(qualities) = cached.payload {
                tracing::debug!(
                    "Cache hit for qualities {}:{} (source: {})",
                    anime_id,
                    episode,
                    cached.source
                );
                return Ok(ResolvedQualities {
                    qualities,
                    source: cached.source,
                });
            }
        }

        for provider in &self.providers {
            match provider.resolve_qualities(anime_id, episode).await {
                Ok(Some(qualities)) => {
                    tracing::info!(
                        "Resolved qualities for {}:{} via {}",
                        anime_id,
                        episode,
                        provider.name()
                    );
                    self.cache.set(
                        &key,
                        CachedResolution {
                            payload: CachePayload::Qualities(qualities.clone()),
                            source: provider.name(),
                        },
                    );
                    return Ok(ResolvedQualities {
                        qualities,
                        source: provider.name(),
                    });
                }
                Ok(None) => {
                    tracing::debug!(
                        "Provider {} has no qualities for {}:{}, trying next",
                        provider.name(),
                        anime_id,
                        episode
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Provider {} failed for {}:{}: {}",
                        provider.name(),
                        anime_id,
                        episode,
                        e
                    );
                }
            }
        }

        Err(ResolveError::Exhausted { anime_id, episode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use provider::ProviderError;

    /// Scripted provider: answers every call with the same outcome and
    /// counts how often it was asked.
    struct ScriptedProvider {
        name: &'static str,
        url: Option<String>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn success(name: &'static str, url: &str) -> Arc<Self> {
            Arc::new(Self {
                name,
                url: Some(url.to_string()),
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn empty(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                url: None,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                url: None,
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn outcome<T>(&self, value: Option<T>) -> Result<Option<T>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProviderError::Aniliberty(
                    aniliberty::AnilibertyError::Api {
                        status: 503,
                        message: "unavailable".to_string(),
                    },
                ));
            }
            Ok(value)
        }
    }

    #[async_trait]
    impl VideoProvider for ScriptedProvider {
        async fn resolve_video(
            &self,
            _anime_id: i64,
            _episode: i64,
        ) -> Result<Option<String>, ProviderError> {
            self.outcome(self.url.clone())
        }

        async fn resolve_qualities(
            &self,
            _anime_id: i64,
            _episode: i64,
        ) -> Result<Option<QualitySet>, ProviderError> {
            self.outcome(self.url.clone().map(|url| QualitySet {
                fhd: None,
                hd: None,
                sd: Some(url),
            }))
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    fn build_resolver(
        providers: Vec<Arc<dyn VideoProvider>>,
    ) -> (Arc<CacheService>, ResolverService) {
        let cache = Arc::new(CacheService::new(Duration::from_secs(60)));
        let resolver = ResolverService::new(Arc::clone(&cache), providers);
        (cache, resolver)
    }

    #[tokio::test]
    async fn test_fallback_walks_providers_in_order() {
        let p1 = ScriptedProvider::empty("aniliberty");
        let p2 = ScriptedProvider::failing("anilibria");
        let p3 = ScriptedProvider::success("anicli", "https://legacy.example/42/3.mp4");
        let providers: Vec<Arc<dyn VideoProvider>> =
            vec![Arc::clone(&p1) as _, Arc::clone(&p2) as _, Arc::clone(&p3) as _];
        let (_cache, resolver) = build_resolver(providers);

        let resolved = resolver.resolve_video(42, 3).await.unwrap();
        assert_eq!(resolved.url, "https://legacy.example/42/3.mp4");
        assert_eq!(resolved.source, "anicli");

        // Empty and failing providers were each attempted exactly once
        assert_eq!(p1.calls(), 1);
        assert_eq!(p2.calls(), 1);
        assert_eq!(p3.calls(), 1);
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let p1 = ScriptedProvider::success("aniliberty", "https://cache.aniliberty.top/1080.m3u8");
        let p2 = ScriptedProvider::success("anilibria", "https://cache.libria.fun/720.m3u8");
        let providers: Vec<Arc<dyn VideoProvider>> =
            vec![Arc::clone(&p1) as _, Arc::clone(&p2) as _];
        let (_cache, resolver) = build_resolver(providers);

        let resolved = resolver.resolve_video(42, 3).await.unwrap();
        assert_eq!(resolved.source, "aniliberty");
        assert_eq!(p2.calls(), 0);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_providers() {
        let p1 = ScriptedProvider::success("aniliberty", "u");
        let providers: Vec<Arc<dyn VideoProvider>> = vec![Arc::clone(&p1) as _];
        let (cache, resolver) = build_resolver(providers);

        let first = resolver.resolve_video(7, 1).await.unwrap();
        let second = resolver.resolve_video(7, 1).await.unwrap();

        assert_eq!(first.url, second.url);
        // Provenance survives the cache
        assert_eq!(second.source, "aniliberty");
        assert_eq!(p1.calls(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_caches_nothing() {
        let p1 = ScriptedProvider::failing("aniliberty");
        let p2 = ScriptedProvider::empty("anilibria");
        let providers: Vec<Arc<dyn VideoProvider>> =
            vec![Arc::clone(&p1) as _, Arc::clone(&p2) as _];
        let (cache, resolver) = build_resolver(providers);

        let err = resolver.resolve_video(999999, 1).await.unwrap_err();
        let ResolveError::Exhausted { anime_id, episode } = err;
        assert_eq!(anime_id, 999999);
        assert_eq!(episode, 1);
        assert_eq!(cache.len(), 0);

        // A later attempt asks the providers again
        let _ = resolver.resolve_video(999999, 1).await;
        assert_eq!(p1.calls(), 2);
        assert_eq!(p2.calls(), 2);
    }

    #[tokio::test]
    async fn test_video_and_qualities_cached_separately() {
        let p1 = ScriptedProvider::success("aniliberty", "u");
        let providers: Vec<Arc<dyn VideoProvider>> = vec![Arc::clone(&p1) as _];
        let (cache, resolver) = build_resolver(providers);

        resolver.resolve_video(1, 1).await.unwrap();
        let resolved = resolver.resolve_qualities(1, 1).await.unwrap();

        // One provider call per resource kind, two cache entries
        assert_eq!(p1.calls(), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(resolved.qualities.preferred(), Some("u"));
        assert_eq!(resolved.source, "aniliberty");
    }

    #[tokio::test]
    async fn test_qualities_fall_back_past_empty_provider() {
        let p1 = ScriptedProvider::empty("aniliberty");
        let p2 = ScriptedProvider::success("anilibria", "https://cache.libria.fun/stream/42/3.m3u8");
        let providers: Vec<Arc<dyn VideoProvider>> =
            vec![Arc::clone(&p1) as _, Arc::clone(&p2) as _];
        let (_cache, resolver) = build_resolver(providers);

        let resolved = resolver.resolve_qualities(42, 3).await.unwrap();
        assert_eq!(resolved.source, "anilibria");
        assert_eq!(
            resolved.qualities.sd.as_deref(),
            Some("https://cache.libria.fun/stream/42/3.m3u8")
        );
    }
}
