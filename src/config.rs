/// Rating constants used by the premium pipeline.
///
/// Loaded once at startup and passed by value into the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConfig {
    /// Share of the car value that is insured before the deductible (1.0 = 100%).
    pub base_coverage_percentage: f64,
    /// Broker fee applied when the request does not carry one.
    pub broker_fee_default: f64,
    /// Deductible percentage applied when the request does not carry one.
    pub deductible_percentage_default: f64,
    /// Rate added per year of car age.
    pub rate_per_year: f64,
    /// Rate added per $10,000 of car value.
    pub rate_per_value: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            base_coverage_percentage: 1.0,
            broker_fee_default: 50.0,
            deductible_percentage_default: 0.1,
            rate_per_year: 0.005,
            rate_per_value: 0.005,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Fixed year used to derive car age. `None` means the current UTC year.
    pub reference_year: Option<i32>,
    pub rates: RateConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        if let Some(year) = config.reference_year {
            tracing::info!("Reference year pinned to {}", year);
        }
        tracing::debug!("Rates: {:?}", config.rates);

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RateConfig::default();

        let rates = RateConfig {
            base_coverage_percentage: read_f64(
                &lookup,
                "BASE_COVERAGE_PERCENTAGE",
                defaults.base_coverage_percentage,
            )
            .and_then(|v| {
                if v < 0.0 {
                    anyhow::bail!("BASE_COVERAGE_PERCENTAGE cannot be negative");
                }
                Ok(v)
            })?,
            broker_fee_default: read_f64(&lookup, "BROKER_FEE_DEFAULT", defaults.broker_fee_default)
                .and_then(|v| {
                    if v < 0.0 {
                        anyhow::bail!("BROKER_FEE_DEFAULT cannot be negative");
                    }
                    Ok(v)
                })?,
            deductible_percentage_default: read_f64(
                &lookup,
                "DEDUCTIBLE_PERCENTAGE_DEFAULT",
                defaults.deductible_percentage_default,
            )
            .and_then(|v| {
                if !(0.0..=1.0).contains(&v) {
                    anyhow::bail!("DEDUCTIBLE_PERCENTAGE_DEFAULT must be between 0 and 1");
                }
                Ok(v)
            })?,
            rate_per_year: read_f64(&lookup, "RATE_PER_YEAR", defaults.rate_per_year)?,
            rate_per_value: read_f64(&lookup, "RATE_PER_VALUE", defaults.rate_per_value)?,
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            reference_year: lookup("REFERENCE_YEAR")
                .filter(|s| !s.trim().is_empty())
                .map(|s| {
                    s.trim()
                        .parse::<i32>()
                        .map_err(|_| anyhow::anyhow!("REFERENCE_YEAR must be an integer year"))
                })
                .transpose()?,
            rates,
        })
    }
}

fn read_f64<F>(lookup: &F, key: &str, default: f64) -> anyhow::Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|s| !s.trim().is_empty()) {
        None => Ok(default),
        Some(raw) => {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("{} must be a number, got '{}'", key, raw))?;
            if !value.is_finite() {
                anyhow::bail!("{} must be a finite number", key);
            }
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.reference_year, None);
        assert_eq!(config.rates, RateConfig::default());
        assert_eq!(config.rates.base_coverage_percentage, 1.0);
        assert_eq!(config.rates.broker_fee_default, 50.0);
        assert_eq!(config.rates.deductible_percentage_default, 0.1);
        assert_eq!(config.rates.rate_per_year, 0.005);
        assert_eq!(config.rates.rate_per_value, 0.005);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("REFERENCE_YEAR", "2025"),
            ("BASE_COVERAGE_PERCENTAGE", "0.8"),
            ("BROKER_FEE_DEFAULT", "25"),
            ("DEDUCTIBLE_PERCENTAGE_DEFAULT", "0.2"),
            ("RATE_PER_YEAR", "0.01"),
            ("RATE_PER_VALUE", " 0.002 "),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.reference_year, Some(2025));
        assert_eq!(config.rates.base_coverage_percentage, 0.8);
        assert_eq!(config.rates.broker_fee_default, 25.0);
        assert_eq!(config.rates.deductible_percentage_default, 0.2);
        assert_eq!(config.rates.rate_per_year, 0.01);
        assert_eq!(config.rates.rate_per_value, 0.002);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("RATE_PER_YEAR", "  "), ("REFERENCE_YEAR", "")]))
                .unwrap();

        assert_eq!(config.rates.rate_per_year, 0.005);
        assert_eq!(config.reference_year, None);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases: &[(&str, &str)] = &[
            ("PORT", "not-a-port"),
            ("PORT", "70000"),
            ("REFERENCE_YEAR", "last year"),
            ("RATE_PER_YEAR", "abc"),
            ("RATE_PER_VALUE", "inf"),
            ("BASE_COVERAGE_PERCENTAGE", "-0.5"),
            ("BROKER_FEE_DEFAULT", "-1"),
            ("DEDUCTIBLE_PERCENTAGE_DEFAULT", "1.5"),
        ];

        for &(key, value) in cases {
            let result = Config::from_lookup(lookup_from(&[(key, value)]));
            assert!(result.is_err(), "{}={} should be rejected", key, value);
        }
    }
}
