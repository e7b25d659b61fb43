//! Final farm report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DistributionBatch, HarvestLot, NurseryBatch, OrchardBlock, ProcessedProduct};

/// Compiled report summarising one full pipeline run
///
/// Always structurally complete: a rejected nursery batch still produces
/// every downstream sub-entity, typically with near-zero figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmReport {
    pub nursery: NurseryBatch,
    pub orchard: OrchardBlock,
    pub harvest: HarvestLot,
    pub processed_goods: Vec<ProcessedProduct>,
    pub distribution: DistributionBatch,
    pub generated_at: DateTime<Utc>,
}
