//! API request handlers

mod cache;
mod health;
mod qualities;
mod video;

use serde::Deserialize;
#[cfg(feature = "openapi")]
use utoipa::IntoParams;

/// Query parameters for episode lookups
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct EpisodeQuery {
    /// Catalog id of the anime
    pub anime_id: i64,
    /// Episode number within the anime
    pub episode: i64,
}

// Re-export all handlers
pub use cache::{cache_stats, clear_cache, CacheStatsResponse, MessageResponse};
pub use health::{health, HealthResponse};
pub use qualities::{get_qualities, QualitiesResponse};
pub use video::get_video;

// Re-export utoipa path structs for OpenAPI routing
#[cfg(feature = "openapi")]
mod openapi_paths {
    #[doc(hidden)]
    pub use super::cache::{__path_cache_stats, __path_clear_cache};
    #[doc(hidden)]
    pub use super::health::__path_health;
    #[doc(hidden)]
    pub use super::qualities::__path_get_qualities;
    #[doc(hidden)]
    pub use super::video::__path_get_video;
}
#[cfg(feature = "openapi")]
pub use openapi_paths::*;
