//! Finds the bid that, together with the fees charged on it, spends a budget
//! without going over.
//!
//! Fees depend on the bid in piecewise ways (clamped, rounded and stepped), so
//! the bid cannot be solved for in closed form. [`BidCalculator`] searches for
//! it with [`bidwise_solve::equation::bisection`], treating
//! `budget - total_spent(bid)` as the residual and never reporting a bid whose
//! total exceeds the budget.
//!
//! ```
//! use bidwise::{BidCalculator, CalculatorConfig};
//!
//! let expenses = BidCalculator::new(1000.0, CalculatorConfig::default()).calculate();
//! assert!(expenses.total_spent() <= 1000.0);
//! ```

mod calculator;
mod config;
mod error;
mod expenses;
pub mod fees;
mod problem;
pub mod scenario;

pub use calculator::{BidCalculator, calculate};
pub use config::{CalculatorConfig, ConfigError};
pub use error::Error;
pub use expenses::{Expenses, FeeField, total_spent};
pub use problem::BudgetProblem;
