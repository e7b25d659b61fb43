//! Cost accumulation models

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cumulative cost breakdown for a batch or block
///
/// Amounts only ever accumulate; there is no subtraction or removal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CostRecord {
    pub items: BTreeMap<String, Decimal>,
}

impl CostRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount under a cost label, creating the entry at zero if absent
    pub fn add(&mut self, label: &str, amount: Decimal) {
        *self.items.entry(label.to_string()).or_insert(Decimal::ZERO) += amount;
    }

    /// Sum of all accumulated amounts
    pub fn total(&self) -> Decimal {
        self.items.values().sum()
    }
}
