//! The fee schedule charged on top of a bid.
//!
//! Every fee is a pure function of the bid. None of them reject negative or
//! out-of-range bids; the formulas are simply evaluated.

use std::convert::Infallible;

use bidwise_solve::Model;

use crate::Expenses;

/// Lower clamp of the basic fee.
pub const BASIC_FEE_MIN: f64 = 10.0;
/// Upper clamp of the basic fee.
pub const BASIC_FEE_MAX: f64 = 50.0;
/// Share of the bid charged as the basic fee before clamping.
pub const BASIC_FEE_RATE: f64 = 0.1;
/// Share of the bid charged as the special fee.
pub const SPECIAL_FEE_RATE: f64 = 0.02;
/// Flat storage fee.
pub const STORAGE_FEE: f64 = 100.0;

/// Association fee bands as `(inclusive upper bound, fee)`.
const ASSOCIATION_BANDS: [(f64, f64); 4] = [
    (500.0, 5.0),
    (1000.0, 10.0),
    (3000.0, 15.0),
    (f64::INFINITY, 20.0),
];

/// Rounds a monetary value to `1 / money_precision`.
///
/// A precision of `100` rounds to cents.
#[must_use]
pub fn round_money(value: f64, money_precision: u32) -> f64 {
    let scale = f64::from(money_precision);
    (value * scale).round() / scale
}

/// Ten percent of the bid, clamped to `[10, 50]`.
#[must_use]
pub fn basic_fee(x: f64) -> f64 {
    let pct = x * BASIC_FEE_RATE;
    if pct <= BASIC_FEE_MIN {
        BASIC_FEE_MIN
    } else if pct >= BASIC_FEE_MAX {
        BASIC_FEE_MAX
    } else {
        pct
    }
}

/// Two percent of the bid, rounded to the money precision.
#[must_use]
pub fn special_fee(x: f64, money_precision: u32) -> f64 {
    round_money(x * SPECIAL_FEE_RATE, money_precision)
}

/// Stepped fee by bid band; each band includes its upper bound.
///
/// | bid               | fee |
/// |-------------------|-----|
/// | `x < 1`           | 0   |
/// | `1 <= x <= 500`   | 5   |
/// | `500 < x <= 1000` | 10  |
/// | `1000 < x <= 3000`| 15  |
/// | `x > 3000`        | 20  |
#[must_use]
pub fn association_fee(x: f64) -> f64 {
    if x < 1.0 {
        return 0.0;
    }
    ASSOCIATION_BANDS
        .iter()
        .find(|(upper, _)| x <= *upper)
        .map_or(0.0, |(_, fee)| *fee)
}

/// The storage fee, which does not depend on the bid.
#[must_use]
pub fn storage_fee() -> f64 {
    STORAGE_FEE
}

/// Maps a bid to its full expense breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeModel {
    money_precision: u32,
}

impl FeeModel {
    /// Creates a fee model rounding monetary fees to `1 / money_precision`.
    #[must_use]
    pub fn new(money_precision: u32) -> Self {
        Self { money_precision }
    }

    #[must_use]
    pub fn money_precision(&self) -> u32 {
        self.money_precision
    }

    /// Returns the bid together with every fee charged on it.
    #[must_use]
    pub fn expenses(&self, x: f64) -> Expenses {
        Expenses {
            bid: x,
            basic_fee: basic_fee(x),
            special_fee: special_fee(x, self.money_precision),
            association_fee: association_fee(x),
            storage_fee: storage_fee(),
        }
    }
}

impl Model for FeeModel {
    type Input = f64;
    type Output = Expenses;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<Expenses, Infallible> {
        Ok(self.expenses(*input))
    }
}
