use bidwise_solve::equation::bisection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric settings for one calculation.
///
/// `precision` drives both the residual tolerance and the grid bids are
/// rounded to during the search (`1 / precision`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorConfig {
    /// Monetary fees are rounded to `1 / money_precision`.
    pub money_precision: u32,
    /// Maximum number of bisection steps.
    pub iterations: usize,
    /// Accepted distance between the budget and the total spent.
    pub precision: f64,
}

/// Reasons a [`CalculatorConfig`] is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("money precision must be positive")]
    MoneyPrecision,
    #[error("precision must be finite and positive, got {0}")]
    Precision(f64),
    #[error("at most 9 decimals fit the money precision, got {0}")]
    Decimals(u32),
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            money_precision: 100,
            iterations: 50,
            precision: 0.01,
        }
    }
}

impl CalculatorConfig {
    /// Builds a config working to `decimals` decimal places.
    ///
    /// Money is rounded to `10^-decimals` and the search stops within the
    /// same distance of the budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decimals`] if `10^decimals` does not fit the
    /// money precision.
    pub fn from_decimals(decimals: u32, iterations: usize) -> Result<Self, ConfigError> {
        let money_precision = 10u32
            .checked_pow(decimals)
            .ok_or(ConfigError::Decimals(decimals))?;
        Ok(Self {
            money_precision,
            iterations,
            precision: 1.0 / f64::from(money_precision),
        })
    }

    /// Checks the precisions. Any number of iterations is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if `money_precision` is zero or `precision` is not a
    /// finite positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.money_precision == 0 {
            return Err(ConfigError::MoneyPrecision);
        }
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(ConfigError::Precision(self.precision));
        }
        Ok(())
    }

    /// Translates this config into bisection settings.
    #[must_use]
    pub fn solver_config(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.iterations,
            x_scale: 1.0 / self.precision,
            residual_tol: self.precision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_cents() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());

        let solver = config.solver_config();
        assert_eq!(solver.max_iters, 50);
        assert_relative_eq!(solver.x_scale, 100.0);
        assert_relative_eq!(solver.residual_tol, 0.01);
    }

    #[test]
    fn from_decimals_scales_both_precisions() {
        let config = CalculatorConfig::from_decimals(3, 80).expect("3 decimals fit");
        assert_eq!(config.money_precision, 1000);
        assert_eq!(config.iterations, 80);
        assert_relative_eq!(config.precision, 0.001);

        let config = CalculatorConfig::from_decimals(0, 10).expect("0 decimals fit");
        assert_eq!(config.money_precision, 1);
        assert_relative_eq!(config.precision, 1.0);
    }

    #[test]
    fn from_decimals_rejects_overflowing_scale() {
        let config = CalculatorConfig::from_decimals(9, 50).expect("9 decimals fit");
        assert_eq!(config.money_precision, 1_000_000_000);
        assert_relative_eq!(config.precision, 1e-9);
        assert!(config.validate().is_ok());

        assert_eq!(
            CalculatorConfig::from_decimals(10, 50),
            Err(ConfigError::Decimals(10))
        );
        assert_eq!(
            CalculatorConfig::from_decimals(u32::MAX, 50),
            Err(ConfigError::Decimals(u32::MAX))
        );
    }

    #[test]
    fn rejects_bad_precisions() {
        let config = CalculatorConfig {
            money_precision: 0,
            ..CalculatorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MoneyPrecision));

        let config = CalculatorConfig {
            precision: 0.0,
            ..CalculatorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Precision(_))));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{ "iterations": 12 }"#).expect("valid json");
        assert_eq!(config.iterations, 12);
        assert_eq!(config.money_precision, 100);
    }
}
