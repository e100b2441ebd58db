use axum::Router;

use crate::state::AppState;

use super::handlers;

// OpenAPI mode: use OpenApiRouter with utoipa macros
#[cfg(feature = "openapi")]
pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    use axum::{routing::get, Json};
    use utoipa::OpenApi;
    use utoipa_axum::{router::OpenApiRouter, routes};

    use crate::openapi::ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::get_video))
        .routes(routes!(handlers::get_qualities))
        .routes(routes!(handlers::cache_stats))
        .routes(routes!(handlers::clear_cache))
        .routes(routes!(handlers::health))
        .with_state(state)
        .split_for_parts();

    // Clone the API spec for the JSON endpoint
    let api_json = api.clone();

    // Add OpenAPI JSON endpoint
    let router = router.route(
        "/openapi.json",
        get(move || async move { Json(api_json) }),
    );

    (router, api)
}

// Non-OpenAPI mode: use standard axum Router
#[cfg(not(feature = "openapi"))]
pub fn create_router(state: AppState) -> Router {
    use axum::routing::{delete, get};

    Router::new()
        // Stream endpoints
        .route("/video", get(handlers::get_video))
        .route("/qualities", get(handlers::get_qualities))
        // Cache administration
        .route("/cache/stats", get(handlers::cache_stats))
        .route("/cache/clear", delete(handlers::clear_cache))
        // Liveness
        .route("/health", get(handlers::health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Config;

    #[tokio::test]
    async fn test_router_builds_with_default_config() {
        let state = AppState::new(Config::default()).unwrap();
        let _ = create_router(state.clone());
        state.actors.cache_sweep.shutdown().await;
    }
}
