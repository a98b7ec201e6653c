use crate::calculator::PremiumCalculator;
use crate::car::Car;
use crate::config::RateConfig;
use crate::models::{CarDetails, PremiumQuote};

/// Composes the car entity and the calculator into a single quote.
///
/// Holds no mutable state, so one instance per request is cheap and any
/// number of them can run concurrently.
pub struct PremiumService {
    calculator: PremiumCalculator,
    reference_year: i32,
}

impl PremiumService {
    /// # Arguments
    ///
    /// * `rates` - Rating constants for this deployment.
    /// * `reference_year` - Calendar year used to derive car age.
    pub fn new(rates: RateConfig, reference_year: i32) -> Self {
        Self {
            calculator: PremiumCalculator::new(rates),
            reference_year,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Calculates the premium quote for a car.
    ///
    /// Runs rate → base premium → deductible discount → final premium, then
    /// the policy limit over the insured value. Inputs are expected to be
    /// validated already; nothing here can fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use car_premium_api::config::RateConfig;
    /// use car_premium_api::services::PremiumService;
    ///
    /// let service = PremiumService::new(RateConfig::default(), 2025);
    /// let quote = service.calculate_premium("Toyota", "Corolla", 2015, 50_000.0, 0.1, 50.0);
    ///
    /// assert!((quote.applied_rate - 0.075).abs() < 1e-9);
    /// assert!((quote.policy_limit - 45_000.0).abs() < 1e-9);
    /// ```
    pub fn calculate_premium(
        &self,
        brand: &str,
        model: &str,
        year: i32,
        value: f64,
        deductible_percentage: f64,
        broker_fee: f64,
    ) -> PremiumQuote {
        let car = Car::new(brand, model, year, value, self.reference_year);

        let applied_rate = self.calculator.calculate_rate(&car);
        let base_premium = self.calculator.calculate_base_premium(&car, applied_rate);
        let deductible_discount = self
            .calculator
            .calculate_deductible_discount(base_premium, deductible_percentage);
        let final_premium = self.calculator.calculate_final_premium(
            base_premium,
            deductible_discount,
            broker_fee,
        );
        let policy_limit = self
            .calculator
            .calculate_policy_limit(&car, deductible_percentage);

        tracing::debug!(
            age = car.age(),
            applied_rate,
            base_premium,
            deductible_discount,
            final_premium,
            base_limit = policy_limit.base_limit,
            "Premium pipeline computed for {} {} ({})",
            car.brand(),
            car.model(),
            car.year()
        );

        PremiumQuote {
            car_details: CarDetails {
                brand: car.brand().to_string(),
                model: car.model().to_string(),
                year: car.year(),
                value: car.value(),
            },
            applied_rate,
            policy_limit: policy_limit.final_limit,
            calculated_premium: final_premium,
            deductible_value: policy_limit.deductible_value,
        }
    }
}
