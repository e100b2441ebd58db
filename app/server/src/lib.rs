pub mod api;
pub mod infra;

#[cfg(feature = "openapi")]
pub mod openapi;

// Re-export domain crate layers
pub use domain::config;
pub use domain::services;

// Re-export infra modules
pub use infra::banner;
pub use infra::error;
pub use infra::state;

use std::net::SocketAddr;

#[cfg(feature = "openapi")]
use utoipa_scalar::{Scalar, Servable};

// Re-export commonly used types
pub use api::create_router;
pub use infra::{print_banner, AppError, AppResult, AppState, Config};

pub async fn run_server(addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    tracing::info!(
        "Cache TTL {}s, sweep every {}s",
        config.cache_ttl.as_secs(),
        config.sweep_interval.as_secs()
    );

    let state = AppState::new(config)?;

    #[cfg(feature = "openapi")]
    let app = {
        let (router, api) = create_router(state.clone());
        router.merge(Scalar::with_url("/docs", api))
    };

    #[cfg(not(feature = "openapi"))]
    let app = create_router(state.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop background work and drop cached state before exiting
    state.actors.cache_sweep.shutdown().await;
    let dropped = state.services.cache.clear();
    tracing::info!("Shutdown complete, dropped {} cached entries", dropped);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
