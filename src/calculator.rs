//! Premium calculation pipeline.
//!
//! Every step is a pure function of its arguments and the [`RateConfig`]
//! captured at construction. The steps are meant to be chained in order:
//! rate → base premium → deductible discount → final premium. The policy
//! limit is computed independently from the insured value.

use crate::car::Car;
use crate::config::RateConfig;

/// Car value is rated in blocks of this many dollars.
pub const VALUE_RATING_UNIT: f64 = 10_000.0;

/// Coverage figures derived from the insured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyLimit {
    /// Value covered before the deductible is taken out.
    pub base_limit: f64,
    /// Portion of the base limit the policyholder bears.
    pub deductible_value: f64,
    /// Maximum payout after the deductible.
    pub final_limit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PremiumCalculator {
    rates: RateConfig,
}

impl PremiumCalculator {
    pub fn new(rates: RateConfig) -> Self {
        Self { rates }
    }

    /// Applied rate from the car's age and value.
    ///
    /// `age * rate_per_year + (value / 10_000) * rate_per_value`, with no caps
    /// or floors. A negative age lowers the rate.
    pub fn calculate_rate(&self, car: &Car) -> f64 {
        let age_rate = f64::from(car.age()) * self.rates.rate_per_year;
        let value_rate = (car.value() / VALUE_RATING_UNIT) * self.rates.rate_per_value;
        age_rate + value_rate
    }

    pub fn calculate_base_premium(&self, car: &Car, applied_rate: f64) -> f64 {
        car.value() * applied_rate
    }

    pub fn calculate_deductible_discount(
        &self,
        base_premium: f64,
        deductible_percentage: f64,
    ) -> f64 {
        base_premium * deductible_percentage
    }

    /// Base premium minus the deductible discount plus the broker fee.
    ///
    /// Not floored at zero.
    pub fn calculate_final_premium(
        &self,
        base_premium: f64,
        deductible_discount: f64,
        broker_fee: f64,
    ) -> f64 {
        base_premium - deductible_discount + broker_fee
    }

    pub fn calculate_policy_limit(&self, car: &Car, deductible_percentage: f64) -> PolicyLimit {
        let base_limit = car.value() * self.rates.base_coverage_percentage;
        let deductible_value = base_limit * deductible_percentage;
        PolicyLimit {
            base_limit,
            deductible_value,
            final_limit: base_limit - deductible_value,
        }
    }
}
