//! Orchard group tests for the apple farm simulator
//!
//! Covers planting, management seasons, and the production decision.

use rust_decimal::Decimal;
use std::str::FromStr;

use apple_farm_simulator::config::{ManagementConfig, PlantingConfig, ProductionConfig};
use apple_farm_simulator::stages::orchard::{evaluate_production, manage, plant};
use shared::NurseryBatch;

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn planting_config() -> PlantingConfig {
    PlantingConfig {
        land_prep_cost_per_tree: Decimal::ONE,
        scaffolding_cost_per_tree: dec("0.4"),
        density_factor: dec("0.95"),
    }
}

fn management_config() -> ManagementConfig {
    ManagementConfig {
        annual_pruning_cost_per_tree: dec("0.6"),
        fertiliser_cost_per_tree: dec("0.4"),
        spray_cost_per_tree: dec("0.3"),
        weather_modifier: dec("0.9"),
    }
}

fn production_config(juvenile_period_years: i32) -> ProductionConfig {
    ProductionConfig {
        juvenile_period_years,
        mature_yield_per_tree: dec("25"),
        weather_yield_modifier: dec("0.85"),
    }
}

// ============================================================================
// Planting
// ============================================================================

#[test]
fn test_plant_applies_density_factor() {
    let block = plant(&NurseryBatch::new(1000), &planting_config());

    assert_eq!(block.planted_trees, 950);
    assert_eq!(block.managed_trees, 950);
    assert_eq!(block.years_since_planting, 0);
    assert!(!block.fruiting);
    assert_eq!(block.expected_yield_kg, Decimal::ZERO);
    assert_eq!(block.costs.items["land_prep"], dec("950"));
    assert_eq!(block.costs.items["scaffolding"], dec("380"));
}

#[test]
fn test_plant_inherits_nursery_notes() {
    let mut batch = NurseryBatch::new(100);
    batch.notes.push("Weather outlook: mild".to_string());
    let block = plant(&batch, &planting_config());

    assert_eq!(block.notes[0], "Weather outlook: mild");
    assert_eq!(
        block.notes.last().unwrap(),
        "Trees planted into orchard block."
    );
}

#[test]
fn test_plant_runs_on_rejected_zero_count_batch() {
    let block = plant(&NurseryBatch::new(0), &planting_config());

    assert_eq!(block.planted_trees, 0);
    assert_eq!(block.costs.total(), Decimal::ZERO);
}

// ============================================================================
// Management
// ============================================================================

#[test]
fn test_manage_adds_one_season() {
    let block = plant(&NurseryBatch::new(100), &planting_config());
    let block = manage(block, &management_config());

    assert_eq!(block.years_since_planting, 1);
    // 95 managed trees * (0.6 + 0.4 + 0.3) per tree
    assert_eq!(block.costs.items["management"], dec("123.5"));
}

#[test]
fn test_manage_accumulates_across_seasons() {
    let mut block = plant(&NurseryBatch::new(100), &planting_config());
    for _ in 0..3 {
        block = manage(block, &management_config());
    }

    assert_eq!(block.years_since_planting, 3);
    assert_eq!(block.costs.items["management"], dec("370.5"));
}

// ============================================================================
// Production decision
// ============================================================================

#[test]
fn test_juvenile_block_does_not_fruit() {
    let block = plant(&NurseryBatch::new(100), &planting_config());
    let block = manage(block, &management_config());
    let block = evaluate_production(block, &production_config(4));

    assert!(!block.fruiting);
    assert_eq!(block.expected_yield_kg, Decimal::ZERO);
    assert!(block.notes.iter().any(|n| n.contains("too young")));
}

#[test]
fn test_mature_block_yield() {
    let block = plant(&NurseryBatch::new(100), &planting_config());
    let block = manage(block, &management_config());
    let block = evaluate_production(block, &production_config(1));

    assert!(block.fruiting);
    // 95 trees * 25 kg * 0.85
    assert_eq!(block.expected_yield_kg, dec("2018.75"));
}

#[test]
fn test_evaluate_production_is_idempotent() {
    let block = plant(&NurseryBatch::new(100), &planting_config());
    let block = manage(block, &management_config());
    let block = evaluate_production(block, &production_config(1));
    let first_yield = block.expected_yield_kg;
    let block = evaluate_production(block, &production_config(1));

    assert_eq!(block.expected_yield_kg, first_yield);
    assert!(block.fruiting);
}
