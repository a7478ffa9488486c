//! Scalar equation solving for the bidwise calculator.
//!
//! The crate separates *what* is evaluated from *how* a root is searched:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`equation::EquationProblem`] — adapts a scalar solver variable to model
//!   input and computes a residual from the model output
//! - [`equation::bisection`] — interval halving that never reports a
//!   candidate with a negative residual when a non-negative one is known
//! - [`equation::Observer`] — receives solver events and can stop the search

pub mod equation;
mod model;

pub use model::{Model, Snapshot};
