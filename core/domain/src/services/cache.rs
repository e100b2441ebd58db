//! In-memory TTL cache for resolution results

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use provider::QualitySet;

/// Key for a cached resolution, scoped by resource kind so a video URL
/// and a quality listing for the same episode never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Video { anime_id: i64, episode: i64 },
    Qualities { anime_id: i64, episode: i64 },
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Video { anime_id, episode } => {
                write!(f, "video_{}_{}", anime_id, episode)
            }
            CacheKey::Qualities { anime_id, episode } => {
                write!(f, "qualities_{}_{}", anime_id, episode)
            }
        }
    }
}

/// Payload stored for a key: a single URL or a full quality listing.
#[derive(Debug, Clone)]
pub enum CachePayload {
    Url(String),
    Qualities(QualitySet),
}

/// A resolution result as stored in the cache.
///
/// Provenance rides along so later cache hits can still report which
/// provider produced the value.
#[derive(Debug, Clone)]
pub struct CachedResolution {
    pub payload: CachePayload,
    pub source: &'static str,
}

struct CacheEntry {
    value: CachedResolution,
    stored_at: Instant,
}

/// In-memory key-value store with one shared TTL.
///
/// Expired entries are dropped lazily on read and in bulk by [`sweep`],
/// which the cache sweep actor calls on a fixed interval. All methods
/// take `&self`; the service is meant to live behind an `Arc`.
///
/// [`sweep`]: CacheService::sweep
pub struct CacheService {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl CacheService {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Look up a key, dropping the entry if its TTL has lapsed
    pub fn get(&self, key: &CacheKey) -> Option<CachedResolution> {
        let key = key.to_string();
        {
            let entries = self.entries.read();
            match entries.get(&key) {
                Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: upgrade to a write lock and evict
        self.entries.write().remove(&key);
        None
    }

    /// Insert or overwrite, resetting the entry's age
    pub fn set(&self, key: &CacheKey, value: CachedResolution) {
        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every expired entry, returning how many were removed
    pub fn sweep(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        before - entries.len()
    }

    /// Drop everything, returning how many entries were removed
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        removed
    }

    /// Number of entries currently stored, expired ones included
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Currently stored key strings, unordered
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
