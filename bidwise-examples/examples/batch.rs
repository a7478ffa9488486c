//! Runs a batch of scenarios and prints expected against actual expenses.
//!
//! ```text
//! cargo run --example batch -- [SCENARIOS.json] [ITERATIONS] [DECIMALS]
//! ```
//!
//! Without arguments the scenarios bundled with the `bidwise` crate are used
//! with 50 iterations and 2 decimals. Set `RUST_LOG=debug` to see each search.

use std::{env, error::Error, process::ExitCode};

use bidwise::{
    CalculatorConfig, FeeField,
    scenario::{self, Outcome},
};
use log::error;

const BUNDLED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../bidwise/data/scenarios.json");

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| BUNDLED.to_owned());
    let iterations: usize = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(50);
    let decimals: u32 = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(2);

    let config = CalculatorConfig::from_decimals(decimals, iterations)?;
    config.validate()?;
    let width = decimals as usize;

    let scenarios = scenario::load_scenario_file(&path)?;
    let outcomes = scenario::run(&scenarios, &config);

    for outcome in &outcomes {
        print_outcome(outcome, config.money_precision, width);
    }

    Ok(outcomes
        .iter()
        .all(|outcome| outcome.is_match(config.money_precision)))
}

fn print_outcome(outcome: &Outcome, money_precision: u32, decimals: usize) {
    let mismatches = outcome.mismatches(money_precision);
    let verdict = if outcome.is_solver_failure() {
        "NO SOLUTION"
    } else if mismatches.is_empty() {
        "ok"
    } else {
        "MISMATCH"
    };

    println!("budget {:.decimals$}  [{verdict}]", outcome.budget);
    println!("  {:<16} {:>14} {:>14}", "", "expected", "actual");
    for field in FeeField::ALL {
        let marker = if mismatches.iter().any(|m| m.field == field) {
            " *"
        } else {
            ""
        };
        println!(
            "  {:<16} {:>14.decimals$} {:>14.decimals$}{marker}",
            field.name(),
            field.value(&outcome.expected),
            field.value(&outcome.actual),
        );
    }
    println!(
        "  {:<16} {:>14.decimals$} {:>14.decimals$}",
        "total spent",
        outcome.expected.total_spent(),
        outcome.actual.total_spent(),
    );
    println!();
}
