use bidwise_solve::equation::bisection;
use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur while searching for a bid.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bid search failed: {0}")]
    Solve(#[from] bisection::Error),
}

impl Error {
    /// Returns true if the budget cannot bracket a bid.
    #[must_use]
    pub fn is_invalid_bracket(&self) -> bool {
        matches!(self, Error::Solve(bisection::Error::InvalidBracket(_)))
    }
}
