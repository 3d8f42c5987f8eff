//! Celestial Mirror API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use celestial_adapters::gemini::GeminiGateway;
use celestial_adapters::geolocation::{DisabledLocator, IpGeolocator};
use celestial_api::config::AppConfig;
use celestial_api::state::AppState;
use celestial_core::clock::SystemClock;
use celestial_core::location::LocationProvider;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Celestial Mirror API server");

    let config = AppConfig::from_env()?;
    if config.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; every reading will use the offline report");
    }

    let locator: Arc<dyn LocationProvider> = match &config.location_lookup_url {
        Some(url) => Arc::new(IpGeolocator::new(url.clone())),
        None => Arc::new(DisabledLocator),
    };
    let app_state = AppState::new(
        Arc::new(SystemClock),
        locator,
        Arc::new(GeminiGateway::new(config.gemini.clone())),
        config.probe_timeout,
    );

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = celestial_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
