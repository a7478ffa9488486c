//! Solvers for scalar equation problems.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! and computes a residual from the model output. Solvers in this module
//! drive that residual toward zero.

mod evaluate;
mod observe;
mod problem;

pub mod bisection;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use observe::Observer;
pub use problem::EquationProblem;
