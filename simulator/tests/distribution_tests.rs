//! Distribution stage tests for the apple farm simulator

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use apple_farm_simulator::config::DistributionConfig;
use apple_farm_simulator::stages::distribution::distribute;
use shared::{ProcessedProduct, ProductUnit};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn product(quantity: &str) -> ProcessedProduct {
    ProcessedProduct::new(
        "Fresh Apples",
        dec(quantity),
        ProductUnit::Kilograms,
        Decimal::ZERO,
    )
}

fn distribution_config(demand: &str) -> DistributionConfig {
    DistributionConfig {
        storage_decay_fraction: dec("0.03"),
        energy_cost_per_kg: dec("0.05"),
        transport_loss_fraction: dec("0.02"),
        consumer_demand_kg: dec(demand),
    }
}

// ============================================================================
// Loss and demand arithmetic
// ============================================================================

#[test]
fn test_distribution_losses_and_unsold_surplus() {
    let batch = distribute(vec![product("500")], &distribution_config("400"));

    // 500 -> 15 storage losses -> 485 transported -> 475.3 delivered
    assert_eq!(batch.storage_losses_kg, dec("15"));
    assert_eq!(batch.customer_demand_kg, dec("400"));
    assert_eq!(batch.unsold_kg, dec("75.3"));
    assert!(batch
        .notes
        .iter()
        .any(|n| n.contains("Unsold product directed to waste stream")));
}

#[test]
fn test_distribution_sums_quantities_across_units() {
    // kg and litres are summed without conversion; downstream loss
    // figures treat the pool as kilograms
    let mut cider = product("100");
    cider.unit = ProductUnit::Litres;
    let batch = distribute(vec![product("400"), cider], &distribution_config("400"));

    assert_eq!(batch.storage_losses_kg, dec("15"));
}

#[test]
fn test_no_waste_note_when_demand_absorbs_delivery() {
    let batch = distribute(vec![product("500")], &distribution_config("8000"));

    assert_eq!(batch.unsold_kg, Decimal::ZERO);
    assert!(!batch
        .notes
        .iter()
        .any(|n| n.contains("waste stream")));
}

#[test]
fn test_empty_product_list_degrades_to_zero() {
    let batch = distribute(Vec::new(), &distribution_config("8000"));

    assert_eq!(batch.storage_losses_kg, Decimal::ZERO);
    assert_eq!(batch.unsold_kg, Decimal::ZERO);
    assert!(batch.products.is_empty());
}

#[test]
fn test_products_are_carried_through_unchanged() {
    let batch = distribute(vec![product("500")], &distribution_config("400"));

    assert_eq!(batch.products.len(), 1);
    assert_eq!(batch.products[0].quantity, dec("500"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Unsold surplus is never negative and never exceeds the delivered
    /// volume.
    #[test]
    fn prop_unsold_bounded(
        quantity in 0u32..100_000,
        demand in 0u32..100_000,
        decay_pct in 0u32..=100,
        transport_pct in 0u32..=100,
    ) {
        let config = DistributionConfig {
            storage_decay_fraction: Decimal::new(i64::from(decay_pct), 2),
            energy_cost_per_kg: dec("0.05"),
            transport_loss_fraction: Decimal::new(i64::from(transport_pct), 2),
            consumer_demand_kg: Decimal::from(demand),
        };
        let batch = distribute(vec![product(&quantity.to_string())], &config);

        prop_assert!(batch.unsold_kg >= Decimal::ZERO);
        prop_assert!(batch.unsold_kg <= Decimal::from(quantity));
    }
}
