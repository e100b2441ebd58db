use utoipa::OpenApi;

use crate::api::handlers::{
    CacheStatsResponse, HealthResponse, MessageResponse, QualitiesResponse,
};
use provider::QualitySet;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kawa API",
        version = "1.0.0"
    ),
    tags(
        (name = "stream", description = "Video resolution and relay endpoints"),
        (name = "cache", description = "Resolution cache administration"),
        (name = "system", description = "Service health endpoints")
    ),
    components(schemas(
        QualitySet,
        QualitiesResponse,
        CacheStatsResponse,
        MessageResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;
