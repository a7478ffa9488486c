use thiserror::Error;

use crate::model::{Model, Snapshot};

use super::EquationProblem;

/// The result of evaluating an equation problem at a given `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<IE, ME, RE> {
    /// Failed to construct the model input from the solver variable.
    #[error("failed to compute input")]
    Input(#[source] IE),
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to compute the residual.
    #[error("failed to compute residual")]
    Residual(#[source] RE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<
        <P as EquationProblem>::InputError,
        <M as Model>::Error,
        <P as EquationProblem>::ResidualError,
    >,
>;

/// Evaluates the model in the context of an equation problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// the residual from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or residual computation fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(EvalError::Input)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residual = problem
        .residual(&input, &output)
        .map_err(EvalError::Residual)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}
