//! Distribution batch models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ProcessedProduct;

/// Goods ready for dispatch to retailers and consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionBatch {
    pub id: Uuid,
    pub products: Vec<ProcessedProduct>,
    pub storage_losses_kg: Decimal,
    pub customer_demand_kg: Decimal,
    pub unsold_kg: Decimal,
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl DistributionBatch {
    pub fn new(
        products: Vec<ProcessedProduct>,
        storage_losses_kg: Decimal,
        customer_demand_kg: Decimal,
        unsold_kg: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            products,
            storage_losses_kg,
            customer_demand_kg,
            unsold_kg,
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
