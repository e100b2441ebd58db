//! Core application services

pub mod cache;
pub mod http_client;
pub mod relay;
pub mod resolver;

pub use cache::{CacheKey, CachePayload, CacheService, CachedResolution};
pub use http_client::{HttpClientError, HttpClientService};
pub use relay::{RelayError, RelayService, RelayedStream};
pub use resolver::{ResolveError, ResolvedQualities, ResolvedVideo, ResolverService};
