use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use car_premium_api::api;
use car_premium_api::config::Config;
use car_premium_api::handlers::AppState;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the router with its
/// middleware (CORS, body limit, rate limiting) and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "car_premium_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let port = config.port;

    let app_state = Arc::new(AppState::new(config));
    tracing::info!(
        "Quoting against reference year {}",
        app_state.reference_year()
    );

    // Health check stays outside the limiter
    let protected_routes = api::rate_limited_routes()?;
    tracing::info!(
        "Rate limiting enabled: burst {}, one request replenished every {}ms",
        api::RATE_LIMIT_BURST,
        api::RATE_LIMIT_REPLENISH_MS
    );

    let app = api::build_app(protected_routes, app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
