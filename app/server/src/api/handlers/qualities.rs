//! Quality listing endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use provider::QualitySet;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::EpisodeQuery;

/// Response carrying all advertised quality tiers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct QualitiesResponse {
    pub qualities: QualitySet,
}

/// List the quality tiers available for an episode
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/qualities",
    tag = "stream",
    params(EpisodeQuery),
    responses(
        (status = 200, description = "Available quality tiers", body = QualitiesResponse),
        (status = 400, description = "Invalid episode coordinates"),
        (status = 404, description = "No provider could resolve the episode")
    )
))]
pub async fn get_qualities(
    State(state): State<AppState>,
    Query(query): Query<EpisodeQuery>,
) -> AppResult<Json<QualitiesResponse>> {
    if query.anime_id <= 0 || query.episode <= 0 {
        return Err(AppError::bad_request("anime_id and episode must be positive"));
    }

    let resolved = state
        .services
        .resolver
        .resolve_qualities(query.anime_id, query.episode)
        .await
        .map_err(|_| AppError::not_found("Qualities not found"))?;

    Ok(Json(QualitiesResponse {
        qualities: resolved.qualities,
    }))
}
