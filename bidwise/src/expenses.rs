use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fees::round_money;

/// A bid together with every fee charged on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expenses {
    pub bid: f64,
    pub basic_fee: f64,
    pub special_fee: f64,
    pub association_fee: f64,
    pub storage_fee: f64,
}

impl Expenses {
    /// The all-zero record reported when no bid could be found.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns true if every field is zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        FeeField::ALL.iter().all(|field| field.value(self) == 0.0)
    }

    /// Sum of the bid and all fees.
    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.bid + self.basic_fee + self.special_fee + self.association_fee + self.storage_fee
    }

    /// Returns a copy with every field rounded to the money precision.
    #[must_use]
    pub fn rounded(&self, money_precision: u32) -> Self {
        Self {
            bid: round_money(self.bid, money_precision),
            basic_fee: round_money(self.basic_fee, money_precision),
            special_fee: round_money(self.special_fee, money_precision),
            association_fee: round_money(self.association_fee, money_precision),
            storage_fee: round_money(self.storage_fee, money_precision),
        }
    }
}

/// Sum of the bid and all fees.
#[must_use]
pub fn total_spent(expenses: &Expenses) -> f64 {
    expenses.total_spent()
}

/// The individual fields of an [`Expenses`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeField {
    Bid,
    BasicFee,
    SpecialFee,
    AssociationFee,
    StorageFee,
}

impl FeeField {
    /// Every field, in display order.
    pub const ALL: [FeeField; 5] = [
        FeeField::Bid,
        FeeField::BasicFee,
        FeeField::SpecialFee,
        FeeField::AssociationFee,
        FeeField::StorageFee,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FeeField::Bid => "bid",
            FeeField::BasicFee => "basic fee",
            FeeField::SpecialFee => "special fee",
            FeeField::AssociationFee => "association fee",
            FeeField::StorageFee => "storage fee",
        }
    }

    /// Reads this field from `expenses`.
    #[must_use]
    pub fn value(self, expenses: &Expenses) -> f64 {
        match self {
            FeeField::Bid => expenses.bid,
            FeeField::BasicFee => expenses.basic_fee,
            FeeField::SpecialFee => expenses.special_fee,
            FeeField::AssociationFee => expenses.association_fee,
            FeeField::StorageFee => expenses.storage_fee,
        }
    }
}

impl fmt::Display for FeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample() -> Expenses {
        Expenses {
            bid: 352.68,
            basic_fee: 35.268,
            special_fee: 7.05,
            association_fee: 5.0,
            storage_fee: 100.0,
        }
    }

    #[test]
    fn total_spent_sums_every_field() {
        assert_relative_eq!(sample().total_spent(), 499.998, epsilon = 1e-9);
        assert_relative_eq!(total_spent(&sample()), sample().total_spent());
    }

    #[test]
    fn zero_is_all_zero() {
        assert!(Expenses::zero().is_zero());
        assert!(!sample().is_zero());
        assert_relative_eq!(Expenses::zero().total_spent(), 0.0);
    }

    #[test]
    fn rounded_rounds_every_field() {
        let rounded = sample().rounded(100);
        assert_relative_eq!(rounded.basic_fee, 35.27);
        assert_relative_eq!(rounded.bid, 352.68);
    }

    #[test]
    fn fields_read_matching_values() {
        let expenses = sample();
        let values: Vec<f64> = FeeField::ALL.iter().map(|f| f.value(&expenses)).collect();
        assert_eq!(values, vec![352.68, 35.268, 7.05, 5.0, 100.0]);
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "bid": 823.51,
            "basicFee": 50,
            "specialFee": 16.47,
            "associationFee": 10,
            "storageFee": 100
        }"#;

        let expenses: Expenses = serde_json::from_str(json).expect("valid json");

        assert_relative_eq!(expenses.bid, 823.51);
        assert_relative_eq!(expenses.special_fee, 16.47);
        assert_relative_eq!(expenses.association_fee, 10.0);
    }
}
