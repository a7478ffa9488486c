//! Batches of budgets with expected results.
//!
//! A scenario file is a JSON array of `{ "budget": .., "expected": { .. } }`
//! records. Each budget is calculated in turn and compared with its expected
//! expenses field by field, after rounding both to the money precision.

use std::{fs::File, io::Read, path::Path};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BidCalculator, CalculatorConfig, Expenses, FeeField, fees::round_money};

/// A budget and the expenses it is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub budget: f64,
    pub expected: Expenses,
}

/// Errors that can occur while loading scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenarios")]
    Io(#[from] std::io::Error),
    #[error("malformed scenarios")]
    Json(#[from] serde_json::Error),
}

/// Parses scenarios from a JSON string.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of scenarios.
pub fn parse_scenarios(text: &str) -> Result<Vec<Scenario>, ScenarioError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads scenarios from a JSON source.
///
/// # Errors
///
/// Returns an error if reading fails or the content is not a JSON array of
/// scenarios.
pub fn load_scenarios(reader: impl Read) -> Result<Vec<Scenario>, ScenarioError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads scenarios from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn load_scenario_file(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ScenarioError> {
    load_scenarios(File::open(path)?)
}

/// A field whose rounded expected and actual values differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub field: FeeField,
    pub expected: f64,
    pub actual: f64,
}

/// Compares two expense records field by field after rounding.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn compare(expected: &Expenses, actual: &Expenses, money_precision: u32) -> Vec<Mismatch> {
    FeeField::ALL
        .into_iter()
        .filter_map(|field| {
            let want = round_money(field.value(expected), money_precision);
            let got = round_money(field.value(actual), money_precision);
            (want != got).then_some(Mismatch {
                field,
                expected: want,
                actual: got,
            })
        })
        .collect()
}

/// The result of running one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub budget: f64,
    pub expected: Expenses,
    pub actual: Expenses,
}

impl Outcome {
    #[must_use]
    pub fn mismatches(&self, money_precision: u32) -> Vec<Mismatch> {
        compare(&self.expected, &self.actual, money_precision)
    }

    #[must_use]
    pub fn is_match(&self, money_precision: u32) -> bool {
        self.mismatches(money_precision).is_empty()
    }

    /// Returns true if no bid was found for a nonzero budget.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_solver_failure(&self) -> bool {
        self.budget != 0.0 && self.actual.is_zero()
    }
}

/// Calculates every scenario in order.
#[must_use]
pub fn run(scenarios: &[Scenario], config: &CalculatorConfig) -> Vec<Outcome> {
    info!(
        "calculating {} scenarios with {} iterations and precision {}",
        scenarios.len(),
        config.iterations,
        config.precision
    );

    let outcomes: Vec<Outcome> = scenarios
        .iter()
        .map(|scenario| Outcome {
            budget: scenario.budget,
            expected: scenario.expected,
            actual: BidCalculator::new(scenario.budget, *config).calculate(),
        })
        .collect();

    let matched = outcomes
        .iter()
        .filter(|outcome| outcome.is_match(config.money_precision))
        .count();
    info!("{matched}/{} scenarios match", outcomes.len());

    outcomes
}
