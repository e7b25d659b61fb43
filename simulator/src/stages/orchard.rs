//! Orchard stages: planting, management, and the production decision

use rust_decimal::Decimal;
use shared::{NurseryBatch, OrchardBlock};

use super::whole_trees;
use crate::config::{ManagementConfig, OrchardConfig, PlantingConfig, ProductionConfig};

/// Plant nursery trees into a new orchard block
///
/// Runs unconditionally even for a rejected batch; a zero or near-zero
/// tree count simply produces a degenerate block. The nursery's notes are
/// carried over so the final report reads as one continuous history.
pub fn plant(batch: &NurseryBatch, config: &PlantingConfig) -> OrchardBlock {
    let planted = whole_trees(Decimal::from(batch.trees) * config.density_factor);
    let mut block = OrchardBlock::new(planted);
    block.costs.add(
        "land_prep",
        Decimal::from(planted) * config.land_prep_cost_per_tree,
    );
    block.costs.add(
        "scaffolding",
        Decimal::from(planted) * config.scaffolding_cost_per_tree,
    );
    block.notes.extend(batch.notes.iter().cloned());
    block.notes.push("Trees planted into orchard block.".to_string());
    block
}

/// Apply one growing season of management operations
pub fn manage(mut block: OrchardBlock, config: &ManagementConfig) -> OrchardBlock {
    let per_tree_cost = config.annual_pruning_cost_per_tree
        + config.fertiliser_cost_per_tree
        + config.spray_cost_per_tree;
    block
        .costs
        .add("management", Decimal::from(block.managed_trees) * per_tree_cost);
    block.notes.push(format!(
        "Applied pruning, fertiliser, and spray schedule with weather modifier {}.",
        config.weather_modifier
    ));
    block.years_since_planting += 1;
    block
}

/// Decide whether the block is fruiting and estimate the season's yield
///
/// Idempotent for an unchanged `years_since_planting`.
pub fn evaluate_production(mut block: OrchardBlock, config: &ProductionConfig) -> OrchardBlock {
    if block.years_since_planting < config.juvenile_period_years {
        block.fruiting = false;
        block.expected_yield_kg = Decimal::ZERO;
        block
            .notes
            .push("Block too young for fruit production; prepare for next season.".to_string());
        return block;
    }

    block.fruiting = true;
    let base_yield = Decimal::from(block.managed_trees) * config.mature_yield_per_tree;
    block.expected_yield_kg = base_yield * config.weather_yield_modifier;
    block.notes.push(format!(
        "Fruit production achieved with expected yield {} kg.",
        block.expected_yield_kg.round_dp(1)
    ));
    block
}

/// Execute the orchard workflow from planting to the production decision
pub fn run_orchard(batch: &NurseryBatch, config: &OrchardConfig) -> OrchardBlock {
    let block = plant(batch, &config.planting);
    let block = manage(block, &config.management);
    let block = evaluate_production(block, &config.production);
    tracing::debug!(
        planted = block.planted_trees,
        fruiting = block.fruiting,
        expected_yield_kg = %block.expected_yield_kg,
        "orchard group complete"
    );
    block
}
