//! Processing branches: fresh market, cider, and juice
//!
//! Three independent pure functions, each reading one feedstock grade from
//! the lot and producing one product. They share no state and may run in
//! any order.

use rust_decimal::Decimal;
use shared::{Grade, HarvestLot, ProcessedProduct, ProductUnit};

use crate::config::{
    CiderProcessingConfig, FreshProcessingConfig, JuiceProcessingConfig, ProcessingConfig,
};

/// Prepare dessert and cooking apples for the fresh market
pub fn process_fresh(lot: &HarvestLot, config: &FreshProcessingConfig) -> ProcessedProduct {
    let feedstock = lot.grade_kg(Grade::Dessert) + lot.grade_kg(Grade::Cooking);
    let retained = feedstock * (Decimal::ONE - config.washing_loss_fraction);
    let waste = feedstock - retained;

    let mut product =
        ProcessedProduct::new("Fresh Apples", retained, ProductUnit::Kilograms, waste);
    product.notes.push(format!(
        "Washed apples with loss fraction {}.",
        config.washing_loss_fraction
    ));
    product
        .notes
        .push("Applied waxing and packed into retail bags/trays.".to_string());
    // Per-kg handling costs follow the retained weight, not the waste.
    product.by_products.insert(
        "packing_cost".to_string(),
        retained * config.packing_cost_per_kg,
    );
    product.by_products.insert(
        "waxing_cost".to_string(),
        retained * config.waxing_cost_per_kg,
    );
    product
}

/// Convert cider-grade apples into bottled cider
pub fn process_cider(lot: &HarvestLot, config: &CiderProcessingConfig) -> ProcessedProduct {
    let feedstock = lot.grade_kg(Grade::Cider);
    let pressed = feedstock * config.pressing_yield;
    let fermentation_loss = pressed * config.fermentation_loss_fraction;
    let fermented = pressed - fermentation_loss;
    let bottled = fermented * config.bottling_efficiency;
    let waste = feedstock - bottled;

    let mut product = ProcessedProduct::new("Cider", bottled, ProductUnit::Litres, waste);
    product
        .by_products
        .insert("pomace_to_animal_feed".to_string(), fermentation_loss);
    product
        .notes
        .push("Pressed, fermented, and bottled cider ready for distribution.".to_string());
    product
}

/// Convert juice-grade apples into packaged concentrate
pub fn process_juice(lot: &HarvestLot, config: &JuiceProcessingConfig) -> ProcessedProduct {
    let feedstock = lot.grade_kg(Grade::Juice);
    let pressed = feedstock * config.pressing_yield;
    let filtered = pressed * (Decimal::ONE - config.filtration_loss_fraction);
    let pasteurised = filtered * config.pasteurisation_efficiency;
    let concentrated = pasteurised * config.concentration_rate;
    let packaged = concentrated * config.packaging_efficiency;
    let waste = feedstock - packaged;

    let mut product = ProcessedProduct::new("Apple Juice", packaged, ProductUnit::Litres, waste);
    product.by_products.insert(
        "pomace_to_animal_feed".to_string(),
        pressed * config.filtration_loss_fraction,
    );
    product.notes.push(
        "Pressed, filtered, pasteurised, concentrated, and packaged juice ready for distribution."
            .to_string(),
    );
    product
}

/// Process the graded harvest into the three product lines
pub fn run_processing(lot: &HarvestLot, config: &ProcessingConfig) -> Vec<ProcessedProduct> {
    let products = vec![
        process_fresh(lot, &config.fresh),
        process_cider(lot, &config.cider),
        process_juice(lot, &config.juice),
    ];
    tracing::debug!(products = products.len(), "processing group complete");
    products
}
