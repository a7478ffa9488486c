use crate::{equation::Evaluation, model::Snapshot};

/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A residual within tolerance was found.
    Converged,
    /// Rounding mapped the midpoint onto an endpoint, so no further progress
    /// was possible.
    IntervalCollapsed,
    /// Reached the iteration limit.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,
    /// Reported root estimate.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,
    /// Midpoint evaluations performed.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(eval: Evaluation<I, O>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            snapshot: eval.snapshot,
            iters,
        }
    }

    /// Returns true if the solver met its residual tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
