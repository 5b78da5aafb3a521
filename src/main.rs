//! Ideation Facilitator HTTP server.

use std::sync::Arc;

use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ideation_facilitator::adapters::{
    api_router, standard_renderers, FacilitationAppState, InMemorySessionStore, RandomWordSource,
};
use ideation_facilitator::config::{
    AppConfig, ConfigError, FacilitationConfig, LogFormat, ServerConfig,
};
use ideation_facilitator::domain::foundation::ValidationError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config.server);

    let state = FacilitationAppState {
        store: Arc::new(InMemorySessionStore::new()),
        stimulus: Arc::new(stimulus_source(&config.facilitation)?),
        renderers: standard_renderers(),
        default_participant: config.facilitation.default_participant.clone(),
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        %addr,
        environment = ?config.server.environment,
        "Starting ideation facilitator"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_filter.as_str()));

    match server.log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .init(),
    }
}

/// Builds the stimulus source from the configured pool and optional seed.
fn stimulus_source(config: &FacilitationConfig) -> Result<RandomWordSource, ValidationError> {
    let source = match config.custom_stimulus_words() {
        Some(words) => RandomWordSource::new(words, config.stimulus_alternatives)?,
        None => RandomWordSource::standard(config.stimulus_alternatives),
    };
    let source = match config.stimulus_seed {
        Some(seed) => source.with_seed(seed),
        None => source,
    };

    info!(
        pool_size = source.pool_size(),
        seeded = config.stimulus_seed.is_some(),
        "Stimulus source ready"
    );
    Ok(source)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .origins()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
