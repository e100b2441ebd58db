//! Video stream endpoint

use axum::{
    body::Body,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::EpisodeQuery;

/// Stream an episode's video through the service.
///
/// Resolution and relaying are separate phases: a failure to resolve is
/// a 404, while a failure to open the already-resolved URL is a 502.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/video",
    tag = "stream",
    params(EpisodeQuery),
    responses(
        (status = 200, description = "Video stream relayed from the resolved source"),
        (status = 400, description = "Invalid episode coordinates"),
        (status = 404, description = "No provider could resolve the episode"),
        (status = 502, description = "Resolved stream could not be opened")
    )
))]
pub async fn get_video(
    State(state): State<AppState>,
    Query(query): Query<EpisodeQuery>,
) -> AppResult<Response> {
    if query.anime_id <= 0 || query.episode <= 0 {
        return Err(AppError::bad_request("anime_id and episode must be positive"));
    }

    let resolved = state
        .services
        .resolver
        .resolve_video(query.anime_id, query.episode)
        .await?;

    let stream = state.services.relay.open(&resolved.url).await?;

    let max_age = state.services.cache.ttl().as_secs();
    let headers = [
        (header::CONTENT_TYPE, stream.content_type().to_string()),
        (header::ACCEPT_RANGES, "bytes".to_string()),
        (header::CACHE_CONTROL, format!("public, max-age={}", max_age)),
    ];

    Ok((headers, Body::from_stream(stream.into_chunks())).into_response())
}
