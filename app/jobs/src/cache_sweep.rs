//! Cache Sweep Actor
//!
//! Periodically drops expired resolution cache entries so keys that are
//! never read again do not accumulate between requests.

use std::sync::Arc;
use std::time::Duration;

use domain::services::CacheService;

use super::actor::{spawn_periodic_actor, ActorHandle, PeriodicActor};

/// Handle for communicating with CacheSweepActor
pub type CacheSweepHandle = ActorHandle;

/// Actor that sweeps the resolution cache on a fixed interval
struct CacheSweepActor {
    cache: Arc<CacheService>,
    interval: Duration,
}

impl PeriodicActor for CacheSweepActor {
    fn interval(&self) -> Duration {
        self.interval
    }

    fn name(&self) -> &'static str {
        "cache_sweep"
    }

    async fn execute(&mut self) {
        tracing::debug!("Starting cache sweep");
        let removed = self.cache.sweep();
        if removed > 0 {
            tracing::info!(
                "Cache sweep removed {} expired entries, {} remain",
                removed,
                self.cache.len()
            );
        } else {
            tracing::debug!(
                "Cache sweep found nothing expired ({} entries)",
                self.cache.len()
            );
        }
    }
}

/// Create and start the cache sweep actor
pub fn create_cache_sweep_actor(cache: Arc<CacheService>, interval: Duration) -> CacheSweepHandle {
    spawn_periodic_actor(CacheSweepActor { cache, interval })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::services::cache::{CacheKey, CachePayload, CachedResolution};

    #[tokio::test]
    async fn test_sweep_actor_evicts_and_joins() {
        let cache = Arc::new(CacheService::new(Duration::from_millis(1)));
        cache.set(
            &CacheKey::Video {
                anime_id: 1,
                episode: 1,
            },
            CachedResolution {
                payload: CachePayload::Url("u".to_string()),
                source: "aniliberty",
            },
        );

        let handle = create_cache_sweep_actor(Arc::clone(&cache), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(cache.len(), 0);

        // Shutdown returns only after the actor task has finished
        handle.shutdown().await;
        // A second shutdown is a no-op
        handle.shutdown().await;
    }
}
