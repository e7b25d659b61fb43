//! Orchestrator for the apple farm production chain

use chrono::Utc;
use shared::{BatchStatus, FarmReport};

use crate::config::Config;
use crate::stages::{distribution, harvesting, nursery, orchard, processing};

/// High-level facade to run the configured farm pipeline
///
/// One instance can run any number of independent executions; each run
/// constructs fresh entities from the same configuration.
pub struct AppleFarm {
    config: Config,
}

impl AppleFarm {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute the production chain from nursery to distribution
    ///
    /// A batch that fails quality control still flows through every
    /// downstream group, so the report is always structurally complete
    /// even when the downstream figures are near zero.
    pub fn run(&self) -> FarmReport {
        let weather = self.config.weather.snapshot();

        let nursery_batch = nursery::run_nursery(&self.config.nursery, &weather);
        match nursery_batch.status {
            BatchStatus::Accepted => {
                tracing::info!(trees = nursery_batch.trees, "nursery batch accepted");
            }
            BatchStatus::Pending | BatchStatus::Rejected => {
                tracing::warn!(
                    trees = nursery_batch.trees,
                    status = %nursery_batch.status,
                    "nursery batch not accepted; downstream stages run on a degenerate block"
                );
            }
        }

        let orchard_block = orchard::run_orchard(&nursery_batch, &self.config.orchard);
        let harvest_lot = harvesting::run_harvest(&orchard_block, &self.config.harvesting);
        let processed_goods = processing::run_processing(&harvest_lot, &self.config.processing);
        let distribution_batch =
            distribution::distribute(processed_goods.clone(), &self.config.distribution);

        FarmReport {
            nursery: nursery_batch,
            orchard: orchard_block,
            harvest: harvest_lot,
            processed_goods,
            distribution: distribution_batch,
            generated_at: Utc::now(),
        }
    }
}
