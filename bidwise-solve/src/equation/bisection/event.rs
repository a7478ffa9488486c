use crate::equation::Evaluation;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report using the usual non-negative preference.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket the midpoint was taken from.
    pub bracket: [f64; 2],
    /// Evaluation at the rounded midpoint.
    pub eval: &'a Evaluation<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }
}
