use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Upper bound on midpoint evaluations. Zero skips the loop entirely.
    pub max_iters: usize,
    /// Each midpoint is rounded to a multiple of `1 / x_scale`.
    pub x_scale: f64,
    /// A midpoint with `|residual| <= residual_tol` ends the search.
    pub residual_tol: f64,
}

/// Reasons a [`Config`] is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("x_scale must be finite and positive, got {0}")]
    XScale(f64),
    #[error("residual_tol must be finite and non-negative, got {0}")]
    ResidualTol(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_scale: 1e9,
            residual_tol: 1e-9,
        }
    }
}

impl Config {
    /// Validates the rounding scale and residual tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_scale` is not a finite positive number or
    /// `residual_tol` is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x_scale.is_finite() || self.x_scale <= 0.0 {
            return Err(ConfigError::XScale(self.x_scale));
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol(self.residual_tol));
        }
        Ok(())
    }

    /// Returns true if a residual is an acceptable root.
    #[must_use]
    pub fn accepts(&self, residual: f64) -> bool {
        residual.abs() <= self.residual_tol
    }
}
