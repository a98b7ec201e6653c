//! HTTP surface: route table and OpenAPI document.

use crate::handlers::{self, AppState};
use crate::models::{CarDetails, HealthResponse, PremiumQuote, QuoteRequest};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Largest accepted request body. Quote requests are a handful of fields.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// One quota element is replenished every 100ms, i.e. 10 requests/second per IP.
pub const RATE_LIMIT_REPLENISH_MS: u64 = 100;
/// Requests an IP may make back to back before being throttled.
pub const RATE_LIMIT_BURST: u32 = 20;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car Insurance Premium Simulator",
        description = "Computes an automobile insurance premium quote from car and policy attributes."
    ),
    paths(handlers::calculate_premium, handlers::health),
    components(schemas(QuoteRequest, PremiumQuote, CarDetails, HealthResponse))
)]
pub struct ApiDoc;

/// Quote and documentation routes, without state or outer layers.
///
/// [`rate_limited_routes`] adds rate limiting on top of these; `/health` is kept
/// out so it bypasses the limiter.
pub fn premium_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/calculate-premium", post(handlers::calculate_premium))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)))
}

/// Quote routes behind a per-IP rate limiter (10 req/s, burst of 20).
///
/// The client IP comes from `X-Forwarded-For`/`X-Real-IP`/`Forwarded`, falling
/// back to the peer address, which requires serving with connect info.
pub fn rate_limited_routes() -> anyhow::Result<Router<Arc<AppState>>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(RATE_LIMIT_REPLENISH_MS)
            .burst_size(RATE_LIMIT_BURST)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );

    Ok(premium_routes().layer(ServiceBuilder::new().layer(GovernorLayer {
        config: governor_conf,
    })))
}

/// Wraps the given quote routes with `/health`, state, tracing and CORS.
pub fn build_app(routes: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Full application router without rate limiting.
pub fn create_router(state: Arc<AppState>) -> Router {
    build_app(premium_routes(), state)
}
