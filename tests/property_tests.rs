/// Property-based tests using proptest
/// Tests invariants of the premium pipeline that should hold for all valid inputs
use car_premium_api::calculator::PremiumCalculator;
use car_premium_api::car::Car;
use car_premium_api::config::RateConfig;
use car_premium_api::services::PremiumService;
use proptest::prelude::*;

const REFERENCE_YEAR: i32 = 2025;

/// Relative tolerance scaled to the magnitude of the figures involved.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

// Property: the rate is linear in age and value
proptest! {
    #[test]
    fn rate_matches_formula(year in 1900i32..=2025, value in 0.01f64..5_000_000.0) {
        let calc = PremiumCalculator::default();
        let car = Car::new("Brand", "Model", year, value, REFERENCE_YEAR);

        let expected = f64::from(REFERENCE_YEAR - year) * 0.005 + (value / 10_000.0) * 0.005;
        prop_assert!(close(calc.calculate_rate(&car), expected));
    }

    #[test]
    fn base_premium_is_value_times_rate(value in 0.01f64..5_000_000.0, rate in -1.0f64..1.0) {
        let calc = PremiumCalculator::default();
        let car = Car::new("Brand", "Model", 2015, value, REFERENCE_YEAR);

        prop_assert_eq!(calc.calculate_base_premium(&car, rate), value * rate);
    }
}

// Property: discount and final premium recombine exactly
proptest! {
    #[test]
    fn final_premium_recombines(
        base in -100_000.0f64..1_000_000.0,
        deductible in 0.0f64..=1.0,
        fee in 0.0f64..10_000.0
    ) {
        let calc = PremiumCalculator::default();
        let discount = calc.calculate_deductible_discount(base, deductible);
        let premium = calc.calculate_final_premium(base, discount, fee);

        prop_assert!(close(premium, base * (1.0 - deductible) + fee));
    }

    #[test]
    fn policy_limit_parts_sum_to_base(
        value in 0.01f64..5_000_000.0,
        deductible in 0.0f64..=1.0
    ) {
        let calc = PremiumCalculator::default();
        let car = Car::new("Brand", "Model", 2015, value, REFERENCE_YEAR);
        let limit = calc.calculate_policy_limit(&car, deductible);

        prop_assert!(close(limit.final_limit + limit.deductible_value, limit.base_limit));
        prop_assert_eq!(limit.base_limit, value * 1.0);
        prop_assert!(limit.final_limit >= -1e-9);
    }
}

// Property: quotes are deterministic
proptest! {
    #[test]
    fn quote_is_idempotent(
        year in 1900i32..=2025,
        value in 0.01f64..5_000_000.0,
        deductible in 0.0f64..=1.0,
        fee in 0.0f64..10_000.0
    ) {
        let service = PremiumService::new(RateConfig::default(), REFERENCE_YEAR);
        let first = service.calculate_premium("Brand", "Model", year, value, deductible, fee);
        let second = service.calculate_premium("Brand", "Model", year, value, deductible, fee);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn quote_echoes_car_details(
        brand in "[A-Za-z]{1,12}",
        model in "[A-Za-z0-9 ]{1,12}",
        year in 1900i32..=2025,
        value in 0.01f64..5_000_000.0
    ) {
        let service = PremiumService::new(RateConfig::default(), REFERENCE_YEAR);
        let quote = service.calculate_premium(&brand, &model, year, value, 0.1, 50.0);

        prop_assert_eq!(quote.car_details.brand, brand);
        prop_assert_eq!(quote.car_details.model, model);
        prop_assert_eq!(quote.car_details.year, year);
        prop_assert_eq!(quote.car_details.value, value);
    }
}
