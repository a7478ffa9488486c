use std::convert::Infallible;

use bidwise_solve::equation::EquationProblem;

use crate::Expenses;

/// The budget equation: the residual is what the budget has left after
/// paying for a bid and its fees.
///
/// A negative residual means the bid overspends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProblem {
    budget: f64,
}

impl BudgetProblem {
    #[must_use]
    pub fn new(budget: f64) -> Self {
        Self { budget }
    }

    #[must_use]
    pub fn budget(&self) -> f64 {
        self.budget
    }
}

impl EquationProblem for BudgetProblem {
    type Input = f64;
    type Output = Expenses;
    type InputError = Infallible;
    type ResidualError = Infallible;

    fn input(&self, x: f64) -> Result<f64, Infallible> {
        Ok(x)
    }

    fn residual(&self, _input: &f64, output: &Expenses) -> Result<f64, Infallible> {
        Ok(self.budget - output.total_spent())
    }
}
