use crate::config::Config;
use crate::errors::AppError;
use crate::models::{HealthResponse, PremiumQuote, QuoteRequest};
use crate::services::PremiumService;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use chrono::Datelike;
use serde_json::Value;
use std::sync::Arc;
use validator::{Validate, ValidationError, ValidationErrors};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, read-only after startup.
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Year car age is measured against: the pinned year if configured,
    /// otherwise the current UTC year.
    pub fn reference_year(&self) -> i32 {
        self.config
            .reference_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}

/// Health check endpoint.
///
/// Returns the service status, name and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// POST /calculate-premium
///
/// Validates the car and policy parameters, fills in configured defaults for
/// the deductible percentage and broker fee, and returns the computed quote.
///
/// # Returns
///
/// * `Result<Json<PremiumQuote>, AppError>` - The quote, or a 400/413/422 with diagnostics.
#[utoipa::path(
    post,
    path = "/calculate-premium",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Premium calculated", body = PremiumQuote),
        (status = 400, description = "Malformed request body"),
        (status = 413, description = "Request body too large"),
        (status = 422, description = "Missing, mistyped or out-of-range fields, or a quote that overflows")
    )
)]
pub async fn calculate_premium(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PremiumQuote>, AppError> {
    let Json(body) = payload?;
    let request = QuoteRequest::from_json(body)?;
    request.validate()?;

    let rates = state.config.rates;
    let deductible_percentage = request
        .deductible_percentage
        .unwrap_or(rates.deductible_percentage_default);
    let broker_fee = request.broker_fee.unwrap_or(rates.broker_fee_default);

    tracing::info!(
        "POST /calculate-premium - {} {} ({}), value: {}, deductible: {}, fee: {}",
        request.brand,
        request.model,
        request.year,
        request.value,
        deductible_percentage,
        broker_fee
    );

    let service = PremiumService::new(rates, state.reference_year());
    let quote = service.calculate_premium(
        &request.brand,
        &request.model,
        request.year,
        request.value,
        deductible_percentage,
        broker_fee,
    );

    if !quote.is_finite() {
        tracing::warn!("Quote overflowed for value {}", request.value);
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("range");
        error.message = Some("value is too large to produce a finite quote".into());
        errors.add("value", error);
        return Err(AppError::Validation(errors));
    }

    tracing::info!(
        "Quote computed: rate {}, premium {}, limit {}",
        quote.applied_rate,
        quote.calculated_premium,
        quote.policy_limit
    );

    Ok(Json(quote))
}
