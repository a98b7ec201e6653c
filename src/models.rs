use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Oldest accepted manufacturing year.
pub const MIN_YEAR: i32 = 1900;
/// Newest accepted manufacturing year.
pub const MAX_YEAR: i32 = 2025;

/// Request body for `POST /calculate-premium`.
///
/// Omitted `deductible_percentage` and `broker_fee` take the configured
/// defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct QuoteRequest {
    /// Car brand, e.g. "Toyota".
    #[schema(example = "Toyota")]
    pub brand: String,
    /// Car model, e.g. "Corolla".
    #[schema(example = "Corolla")]
    pub model: String,
    /// Manufacturing year.
    #[validate(range(min = 1900, max = 2025, message = "year must be between 1900 and 2025"))]
    #[schema(example = 2012, minimum = 1900, maximum = 2025)]
    pub year: i32,
    /// Current market value in dollars.
    #[validate(range(exclusive_min = 0.0, message = "value must be greater than 0"))]
    #[schema(example = 100000.0)]
    pub value: f64,
    /// Share of the value the policyholder bears (0.1 = 10%).
    #[validate(range(min = 0.0, max = 1.0, message = "deductible_percentage must be between 0 and 1"))]
    #[serde(default)]
    #[schema(example = 0.1, minimum = 0.0, maximum = 1.0)]
    pub deductible_percentage: Option<f64>,
    /// Flat brokerage fee in dollars.
    #[validate(range(min = 0.0, message = "broker_fee must be non-negative"))]
    #[serde(default)]
    #[schema(example = 50.0, minimum = 0.0)]
    pub broker_fee: Option<f64>,
}

/// JSON type a request field must carry.
#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Text,
    Integer,
    Number,
}

/// (name, kind, required) for every field of [`QuoteRequest`].
const REQUEST_FIELDS: [(&str, FieldKind, bool); 6] = [
    ("brand", FieldKind::Text, true),
    ("model", FieldKind::Text, true),
    ("year", FieldKind::Integer, true),
    ("value", FieldKind::Number, true),
    ("deductible_percentage", FieldKind::Number, false),
    ("broker_fee", FieldKind::Number, false),
];

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

impl QuoteRequest {
    /// Builds a request from a decoded JSON body.
    ///
    /// Missing or mistyped fields are reported per field as validation
    /// errors, so the caller gets the same diagnostics shape as for range
    /// violations. Range rules are not checked here; call `validate` after.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let object = body.as_object().ok_or_else(|| {
            AppError::BadRequest("Request body must be a JSON object".to_string())
        })?;

        let mut errors = ValidationErrors::new();
        for (name, kind, required) in REQUEST_FIELDS {
            match object.get(name) {
                None | Some(Value::Null) => {
                    if required {
                        let message = format!("{} is required", name);
                        errors.add(name, field_error("required", message));
                    }
                }
                Some(value) => {
                    let (ok, expected) = match kind {
                        FieldKind::Text => (value.is_string(), "a string"),
                        FieldKind::Integer => (
                            value.as_i64().and_then(|n| i32::try_from(n).ok()).is_some(),
                            "an integer",
                        ),
                        FieldKind::Number => (value.is_number(), "a number"),
                    };
                    if !ok {
                        let message = format!("{} must be {}", name, expected);
                        errors.add(name, field_error("type", message));
                    }
                }
            }
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

/// Car attributes echoed back in a quote.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct CarDetails {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub value: f64,
}

/// Result of a premium calculation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PremiumQuote {
    pub car_details: CarDetails,
    /// Rate applied to the car value to obtain the base premium.
    #[schema(example = 0.115)]
    pub applied_rate: f64,
    /// Insured amount after the deductible.
    #[schema(example = 90000.0)]
    pub policy_limit: f64,
    /// Final premium payable by the policyholder.
    #[schema(example = 10400.0)]
    pub calculated_premium: f64,
    /// Deductible amount taken out of the coverage.
    #[schema(example = 10000.0)]
    pub deductible_value: f64,
}

impl PremiumQuote {
    /// False when any figure overflowed, e.g. from an extremely large car value.
    pub fn is_finite(&self) -> bool {
        [
            self.applied_rate,
            self.policy_limit,
            self.calculated_premium,
            self.deductible_value,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
