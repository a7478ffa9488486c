use bidwise_solve::equation::bisection::{self, Solution};
use log::{debug, warn};

use crate::{BudgetProblem, CalculatorConfig, Error, Expenses, fees::FeeModel};

/// Finds the bid that spends a budget without going over.
///
/// The search runs over `[0, budget]`: no bid at all at one end, the whole
/// budget spent on the bid alone at the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidCalculator {
    budget: f64,
    config: CalculatorConfig,
}

impl BidCalculator {
    #[must_use]
    pub fn new(budget: f64, config: CalculatorConfig) -> Self {
        Self { budget, config }
    }

    #[must_use]
    pub fn budget(&self) -> f64 {
        self.budget
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the full expense breakdown for bid `x`.
    #[must_use]
    pub fn expenses(&self, x: f64) -> Expenses {
        self.fee_model().expenses(x)
    }

    /// Runs the search and returns the raw solver outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the fees cannot be
    /// bracketed inside `[0, budget]`.
    pub fn try_calculate(&self) -> Result<Solution<f64, Expenses>, Error> {
        self.config.validate()?;

        let solution = bisection::solve_unobserved(
            &self.fee_model(),
            &BudgetProblem::new(self.budget),
            [0.0, self.budget],
            &self.config.solver_config(),
        )?;

        debug!(
            "budget {}: bid {} leaves {} after {} iterations ({:?})",
            self.budget, solution.x, solution.residual, solution.iters, solution.status
        );
        Ok(solution)
    }

    /// Returns the expenses at the chosen bid.
    ///
    /// A budget that cannot be solved yields [`Expenses::zero`]; a nonzero
    /// budget with all-zero expenses should be read as "no bid found".
    #[must_use]
    pub fn calculate(&self) -> Expenses {
        match self.try_calculate() {
            Ok(solution) => solution.snapshot.output,
            Err(error) if error.is_invalid_bracket() => {
                warn!("no bid found for budget {}: {error}", self.budget);
                Expenses::zero()
            }
            Err(error) => {
                warn!("bid search for budget {} failed: {error}", self.budget);
                Expenses::zero()
            }
        }
    }

    fn fee_model(&self) -> FeeModel {
        FeeModel::new(self.config.money_precision)
    }
}

/// Calculates the expenses for `budget` with explicit numeric settings.
#[must_use]
pub fn calculate(budget: f64, money_precision: u32, iterations: usize, precision: f64) -> Expenses {
    let config = CalculatorConfig {
        money_precision,
        iterations,
        precision,
    };
    BidCalculator::new(budget, config).calculate()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use bidwise_solve::equation::bisection::Status;

    fn calculator(budget: f64) -> BidCalculator {
        BidCalculator::new(budget, CalculatorConfig::default())
    }

    #[test]
    fn solves_thousand_budget() {
        let expenses = calculator(1000.0).calculate();

        assert_relative_eq!(expenses.bid, 823.51);
        assert_relative_eq!(expenses.basic_fee, 50.0);
        assert_relative_eq!(expenses.special_fee, 16.47);
        assert_relative_eq!(expenses.association_fee, 10.0);
        assert_relative_eq!(expenses.storage_fee, 100.0);
        assert_relative_eq!(expenses.total_spent(), 999.98, epsilon = 1e-9);
    }

    #[test]
    fn exact_budget_converges() {
        let solution = calculator(1500.0).try_calculate().expect("should solve");

        assert!(solution.is_converged());
        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 1308.82);
        assert!(solution.residual >= 0.0);
        assert!(solution.residual <= 0.01);
    }

    #[test]
    fn never_overspends() {
        let mut budget = 111.0;
        while budget < 20_000.0 {
            let expenses = calculator(budget).calculate();
            assert!(!expenses.is_zero(), "budget {budget} should be solvable");
            assert!(
                expenses.total_spent() <= budget,
                "budget {budget} overspent: {}",
                expenses.total_spent()
            );
            budget += 97.31;
        }
    }

    #[test]
    fn few_iterations_still_return_a_safe_bid() {
        let expenses = calculate(1000.0, 100, 1, 0.01);
        assert_relative_eq!(expenses.bid, 500.0);
        assert_relative_eq!(expenses.total_spent(), 665.0);

        let expenses = calculate(1000.0, 100, 0, 0.01);
        assert_relative_eq!(expenses.bid, 0.0);
        assert_relative_eq!(expenses.total_spent(), 110.0);

        for iterations in 1..20 {
            let expenses = calculate(1000.0, 100, iterations, 0.01);
            assert!(expenses.total_spent() <= 1000.0);
        }
    }

    #[test]
    fn is_idempotent() {
        let first = calculator(2500.0).calculate();
        let second = calculator(2500.0).calculate();

        assert_eq!(first, second);
        assert_eq!(first.bid.to_bits(), second.bid.to_bits());
    }

    #[test]
    fn unbracketed_budgets_fall_back_to_zero() {
        for budget in [0.0, 50.0, 109.99] {
            let calculator = calculator(budget);

            let result = calculator.try_calculate();
            assert!(matches!(result, Err(ref e) if e.is_invalid_bracket()));
            assert!(calculator.calculate().is_zero());
        }
    }

    #[test]
    fn budget_covering_only_fixed_fees_bids_nothing() {
        let expenses = calculator(110.0).calculate();

        assert_relative_eq!(expenses.bid, 0.0);
        assert_relative_eq!(expenses.basic_fee, 10.0);
        assert_relative_eq!(expenses.storage_fee, 100.0);
        assert_relative_eq!(expenses.total_spent(), 110.0);
    }

    #[test]
    fn invalid_config_falls_back_to_zero() {
        let calculator = BidCalculator::new(
            1000.0,
            CalculatorConfig {
                precision: -1.0,
                ..CalculatorConfig::default()
            },
        );

        assert!(matches!(calculator.try_calculate(), Err(Error::Config(_))));
        assert!(calculator.calculate().is_zero());
    }

    #[test]
    fn coarser_precision_rounds_bid_to_grid() {
        let expenses = calculate(1000.0, 1, 50, 1.0);

        assert_relative_eq!(expenses.bid, 823.0);
        assert_relative_eq!(expenses.special_fee, 16.0);
        assert!(expenses.total_spent() <= 1000.0);
    }

    #[test]
    fn free_function_builds_the_same_calculator() {
        let config = CalculatorConfig::from_decimals(1, 20).expect("1 decimal fits");
        let calculator = BidCalculator::new(2500.0, config);

        assert_relative_eq!(calculator.budget(), 2500.0);
        assert_eq!(calculator.config(), &config);
        assert_eq!(
            calculator.calculate(),
            calculate(
                calculator.budget(),
                calculator.config().money_precision,
                calculator.config().iterations,
                calculator.config().precision,
            )
        );
    }

    #[test]
    fn expenses_matches_fee_model() {
        let calculator = calculator(1000.0);
        assert_eq!(calculator.expenses(352.68), FeeModel::new(100).expenses(352.68));
    }
}
