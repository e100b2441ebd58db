use std::sync::Arc;

use anicli::AnicliClient;
use aniliberty::AnilibertyClient;
use anilibria::AnilibriaClient;
use provider::{AnicliProvider, AnilibertyProvider, AnilibriaProvider, VideoProvider};

use domain::services::{
    CacheService, HttpClientError, HttpClientService, RelayService, ResolverService,
};
use domain::Config;
use jobs::{create_cache_sweep_actor, CacheSweepHandle};

/// Infrastructure layer - core dependencies
#[derive(Clone)]
pub struct AppInfra {
    pub config: Arc<Config>,
    pub http_client: Arc<HttpClientService>,
}

/// Business services layer - core application services
#[derive(Clone)]
pub struct AppServices {
    pub cache: Arc<CacheService>,
    pub resolver: Arc<ResolverService>,
    pub relay: Arc<RelayService>,
}

/// Background actors layer - actor handles
#[derive(Clone)]
pub struct AppActors {
    pub cache_sweep: Arc<CacheSweepHandle>,
}

/// Application state - organized into logical groups
#[derive(Clone)]
pub struct AppState {
    pub infra: Arc<AppInfra>,
    pub services: AppServices,
    pub actors: AppActors,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, HttpClientError> {
        let http_client = Arc::new(HttpClientService::new(config.request_timeout)?);

        // Upstream API clients share the bounded API client profile
        let api_client = http_client.api_client();
        let aniliberty = Arc::new(AnilibertyClient::with_base_urls(
            api_client.clone(),
            vec![config.aniliberty_url.clone()],
        ));
        let anilibria = Arc::new(
            AnilibriaClient::with_base_urls(api_client.clone(), config.anilibria_urls.clone())
                .stream_base(config.anilibria_stream_url.clone()),
        );
        let anicli = Arc::new(AnicliClient::with_base_urls(
            api_client,
            vec![config.anicli_url.clone()],
        ));

        // Fixed resolution order: primary, mirror-backed fallback, legacy bridge
        let providers: Vec<Arc<dyn VideoProvider>> = vec![
            Arc::new(AnilibertyProvider::new(aniliberty)),
            Arc::new(AnilibriaProvider::new(anilibria)),
            Arc::new(AnicliProvider::new(anicli)),
        ];

        // Create core services
        let cache = Arc::new(CacheService::new(config.cache_ttl));
        let resolver = Arc::new(ResolverService::new(Arc::clone(&cache), providers));
        let relay = Arc::new(RelayService::new(http_client.relay_client()));

        // Start the background sweep
        let cache_sweep = Arc::new(create_cache_sweep_actor(
            Arc::clone(&cache),
            config.sweep_interval,
        ));

        // Build sub-structures
        let infra = Arc::new(AppInfra {
            config: Arc::new(config),
            http_client,
        });

        let services = AppServices {
            cache,
            resolver,
            relay,
        };

        let actors = AppActors { cache_sweep };

        Ok(Self {
            infra,
            services,
            actors,
        })
    }
}
