//! Processed product models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ProductUnit;

/// Goods leaving a processing branch
///
/// One instance per branch (fresh, cider, juice); never mutated outside
/// the stage that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedProduct {
    pub id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub unit: ProductUnit,
    pub waste_kg: Decimal,
    /// Secondary outputs (material streams or per-kg costs) keyed by label
    pub by_products: BTreeMap<String, Decimal>,
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ProcessedProduct {
    pub fn new(
        name: impl Into<String>,
        quantity: Decimal,
        unit: ProductUnit,
        waste_kg: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            unit,
            waste_kg,
            by_products: BTreeMap::new(),
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
