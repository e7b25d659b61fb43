//! Nursery batch models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CostRecord;
use crate::types::BatchStatus;

/// Rootstock material that will eventually become orchard trees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NurseryBatch {
    pub id: Uuid,
    pub trees: i64,
    pub status: BatchStatus,
    pub cost: CostRecord,
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl NurseryBatch {
    /// Create a pending batch with the given tree count
    pub fn new(trees: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            trees,
            status: BatchStatus::Pending,
            cost: CostRecord::new(),
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
