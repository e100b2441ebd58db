//! Cache administration endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Cache statistics response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CacheStatsResponse {
    /// Number of live entries
    pub cache_size: usize,
    /// Configured TTL in seconds
    pub ttl_seconds: u64,
    /// Live cache keys
    pub keys: Vec<String>,
}

/// Response for administrative operations
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

/// Report cache statistics.
///
/// Expired entries are swept first so the numbers reflect live data only.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/cache/stats",
    tag = "cache",
    responses(
        (status = 200, description = "Cache statistics", body = CacheStatsResponse)
    )
))]
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let cache = &state.services.cache;
    cache.sweep();

    Json(CacheStatsResponse {
        cache_size: cache.len(),
        ttl_seconds: cache.ttl().as_secs(),
        keys: cache.keys(),
    })
}

/// Drop every cached resolution unconditionally
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/cache/clear",
    tag = "cache",
    responses(
        (status = 200, description = "Cache emptied", body = MessageResponse)
    )
))]
pub async fn clear_cache(State(state): State<AppState>) -> Json<MessageResponse> {
    let removed = state.services.cache.clear();
    tracing::info!("Cache cleared by request, {} entries removed", removed);

    Json(MessageResponse {
        message: "Cache cleared successfully".to_string(),
    })
}
