//! Orchard block models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CostRecord;

/// The orchard during establishment and production
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchardBlock {
    pub id: Uuid,
    pub planted_trees: i64,
    pub managed_trees: i64,
    pub years_since_planting: i32,
    pub fruiting: bool,
    pub expected_yield_kg: Decimal,
    pub costs: CostRecord,
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl OrchardBlock {
    /// Create a freshly planted, non-fruiting block
    pub fn new(planted_trees: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            planted_trees,
            managed_trees: planted_trees,
            years_since_planting: 0,
            fruiting: false,
            expected_yield_kg: Decimal::ZERO,
            costs: CostRecord::new(),
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
