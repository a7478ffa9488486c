use thiserror::Error;

use crate::equation::Evaluation;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },
    /// Residual signs do not bracket a root.
    #[error("no sign change: f({left})={left_residual}, f({right})={right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// The sign of a residual for bracket logic.
///
/// Zero counts as [`Sign::Positive`]: a zero residual never overspends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Rounds `value` to the grid spaced `1 / scale` apart.
#[must_use]
pub fn round_to_scale(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// Equal endpoints are accepted; the residual check decides whether such
    /// a bracket is usable.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite { left, right });
        }

        if left <= right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(super) fn as_array(self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// The current search interval, holding the evaluation at each endpoint.
#[derive(Debug, Clone)]
pub(super) struct Bracket<I, O> {
    left: Evaluation<I, O>,
    right: Evaluation<I, O>,
}

impl<I, O> Bracket<I, O> {
    /// Creates a bracket from endpoint evaluations whose residuals differ in sign.
    pub(super) fn new(left: Evaluation<I, O>, right: Evaluation<I, O>) -> Result<Self, BracketError> {
        if Sign::of(left.residual) == Sign::of(right.residual) {
            return Err(BracketError::NoSignChange {
                left: left.x,
                right: right.x,
                left_residual: left.residual,
                right_residual: right.residual,
            });
        }

        Ok(Self { left, right })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left.x, self.right.x]
    }

    /// Returns the midpoint of the bracket rounded to the `x_scale` grid.
    pub(super) fn midpoint(&self, x_scale: f64) -> f64 {
        round_to_scale(0.5 * (self.left.x + self.right.x), x_scale)
    }

    /// Returns true if `x` lands on either endpoint.
    ///
    /// Once rounding maps the midpoint onto an endpoint the interval cannot
    /// shrink any further.
    #[allow(clippy::float_cmp)]
    pub(super) fn is_endpoint(&self, x: f64) -> bool {
        x == self.left.x || x == self.right.x
    }

    /// Replaces the endpoint whose residual sign matches the new evaluation.
    pub(super) fn shrink(&mut self, eval: Evaluation<I, O>) {
        if Sign::of(self.left.residual) == Sign::of(eval.residual) {
            self.left = eval;
        } else {
            self.right = eval;
        }
    }

    /// Picks the evaluation to report once the search stops.
    ///
    /// A non-negative `last` midpoint wins. Otherwise the left endpoint is
    /// reported when it is non-negative and differs from `last`, and the right
    /// endpoint in every other case.
    #[allow(clippy::float_cmp)]
    pub(super) fn settle(self, last: Option<Evaluation<I, O>>) -> Evaluation<I, O> {
        if let Some(eval) = last {
            if eval.residual >= 0.0 {
                return eval;
            }
            if self.left.residual != eval.residual && self.left.residual >= 0.0 {
                return self.left;
            }
            return self.right;
        }

        if self.left.residual >= 0.0 {
            self.left
        } else {
            self.right
        }
    }
}
