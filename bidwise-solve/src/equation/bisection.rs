//! Bisection that never reports an overshooting root.
//!
//! The residual is read as "what is left over": a negative residual means the
//! candidate overshoots, which is never an acceptable answer when a
//! non-negative alternative is known, even if it is numerically closer to
//! zero. Each midpoint is rounded to the grid `1 / x_scale`, so the search
//! also stops once rounding can no longer shrink the interval.

mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use bracket::{BracketError, Sign, round_to_scale};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};

use bracket::{Bounds, Bracket};

use crate::{
    equation::{EquationProblem, Evaluation, Observer, evaluate},
    model::Model,
};

/// Finds a root of the equation using the bisection method.
/// Observers see each midpoint evaluation along with the bracket it came from.
///
/// An endpoint whose residual is non-negative and within tolerance is returned
/// right away. Otherwise the endpoint residuals must differ in sign, with zero
/// counted as positive.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the config is invalid,
/// a residual is non-finite, or the model or problem returns an error
/// during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;
    let [left, right] = Bounds::new(bracket)?.as_array();

    let left_eval = finite(evaluate(model, problem, left)?)?;
    if left_eval.residual >= 0.0 && config.accepts(left_eval.residual) {
        return Ok(Solution::from_eval(left_eval, Status::Converged, 0));
    }

    let right_eval = finite(evaluate(model, problem, right)?)?;
    if right_eval.residual >= 0.0 && config.accepts(right_eval.residual) {
        return Ok(Solution::from_eval(right_eval, Status::Converged, 0));
    }

    let mut bracket = Bracket::new(left_eval, right_eval)?;
    let mut last = None;

    for iter in 1..=config.max_iters {
        let x = bracket.midpoint(config.x_scale);
        let eval = finite(evaluate(model, problem, x)?)?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &eval,
        };
        let action = observer.observe(&event);

        let stop = match action {
            Some(Action::StopEarly) => Some(Status::StoppedByObserver),
            None if config.accepts(eval.residual) => Some(Status::Converged),
            None if bracket.is_endpoint(x) => Some(Status::IntervalCollapsed),
            None => None,
        };

        if let Some(status) = stop {
            let chosen = bracket.settle(Some(eval));
            return Ok(Solution::from_eval(chosen, status, iter));
        }

        bracket.shrink(eval.clone());
        last = Some(eval);
    }

    let chosen = bracket.settle(last);
    Ok(Solution::from_eval(chosen, Status::MaxIters, config.max_iters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the config is invalid,
/// a residual is non-finite, or the model or problem returns an error
/// during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

fn finite<I, O>(eval: Evaluation<I, O>) -> Result<Evaluation<I, O>, Error> {
    if eval.residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x,
            residual: eval.residual,
        })
    }
}
