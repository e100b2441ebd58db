//! Service configuration
//!
//! All settings come from environment variables with code defaults; the
//! process never requires a config file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

const DEFAULT_ANILIBERTY_URL: &str = "https://aniliberty.top/api/v1";
const DEFAULT_ANILIBRIA_URLS: &str = "https://api.anilibria.tv/v3,https://anilibria.tv/api/v3";
const DEFAULT_ANILIBRIA_STREAM_URL: &str = "https://cache.libria.fun";
const DEFAULT_ANICLI_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How long a cached resolution stays valid
    pub cache_ttl: Duration,
    /// How often the background sweep drops expired entries
    pub sweep_interval: Duration,
    /// Total timeout for provider API requests
    pub request_timeout: Duration,
    /// AniLiberty API base URL
    pub aniliberty_url: String,
    /// AniLibria API base URLs in priority order
    pub anilibria_urls: Vec<String>,
    /// Host that serves AniLibria's root-relative playlist paths
    pub anilibria_stream_url: String,
    /// Legacy anicli bridge base URL
    pub anicli_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            aniliberty_url: DEFAULT_ANILIBERTY_URL.to_string(),
            anilibria_urls: split_urls(DEFAULT_ANILIBRIA_URLS),
            anilibria_stream_url: DEFAULT_ANILIBRIA_STREAM_URL.to_string(),
            anicli_url: DEFAULT_ANICLI_URL.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from environment variables, falling back
    /// to defaults for anything unset or malformed.
    pub fn from_env() -> Self {
        Self {
            cache_ttl: Duration::from_secs(env_u64("CACHE_TTL", DEFAULT_CACHE_TTL_SECS)),
            sweep_interval: Duration::from_secs(env_u64(
                "CACHE_SWEEP_INTERVAL",
                DEFAULT_SWEEP_INTERVAL_SECS,
            )),
            request_timeout: Duration::from_secs(env_u64(
                "REQUEST_TIMEOUT",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            aniliberty_url: env_string("ANILIBERTY_API_URL", DEFAULT_ANILIBERTY_URL),
            anilibria_urls: split_urls(&env_string("ANILIBRIA_API_URLS", DEFAULT_ANILIBRIA_URLS)),
            anilibria_stream_url: env_string("ANILIBRIA_STREAM_URL", DEFAULT_ANILIBRIA_STREAM_URL),
            anicli_url: env_string("ANICLI_API_URL", DEFAULT_ANICLI_URL),
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid value for {}: '{}', using default {}",
                key,
                raw,
                default
            );
            default
        }),
        Err(_) => default,
    }
}

fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_urls() {
        assert_eq!(
            split_urls("https://a/v3, https://b/api/v3"),
            vec!["https://a/v3", "https://b/api/v3"]
        );
        assert_eq!(split_urls(""), Vec::<String>::new());
        assert_eq!(split_urls("https://solo"), vec!["https://solo"]);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.anilibria_urls.len(), 2);
        assert!(config.anilibria_urls[0].contains("api.anilibria.tv"));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.sweep_interval, Duration::from_secs(300));
    }
}
