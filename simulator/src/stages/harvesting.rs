//! Harvesting stages: picking, storage, and grading

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use shared::{GradeSplit, HarvestLot, LotGrades, OrchardBlock};

use crate::config::{GradingConfig, HarvestConfig, PickingConfig, StorageConfig};

/// Harvest fruit from the orchard block and create the initial lot
///
/// A non-fruiting block yields an empty lot and skips all later
/// computation in this group.
pub fn pick(block: &OrchardBlock, config: &PickingConfig) -> HarvestLot {
    if !block.fruiting {
        let mut lot = HarvestLot::empty();
        lot.notes.push("No fruit available for harvest.".to_string());
        return lot;
    }

    let effective_yield = block.expected_yield_kg * config.field_grading_efficiency;
    let mut lot = HarvestLot::with_total(
        effective_yield,
        LotGrades::FieldRun {
            field_run_kg: effective_yield,
        },
    );
    lot.notes.push(format!(
        "Harvested over {} days with efficiency {}.",
        config.time_to_harvest_days, config.field_grading_efficiency
    ));
    lot
}

/// Apply storage constraints and compound quality decay
///
/// Capacity is a hard cap: kilograms above it are dropped without being
/// recorded as a loss figure.
pub fn store(mut lot: HarvestLot, config: &StorageConfig) -> HarvestLot {
    if lot.total_kg <= Decimal::ZERO {
        return lot;
    }

    let stored = lot.total_kg.min(config.storage_capacity_kg);
    let decay_factor = (Decimal::ONE - config.daily_decay_rate).powi(config.storage_days);
    let retained = stored * decay_factor;
    let loss = stored - retained;

    lot.notes.push(format!(
        "Stored {} kg for {} days; losses {} kg.",
        stored.round_dp(1),
        config.storage_days,
        loss.round_dp(1)
    ));
    let field_run_kg = match lot.grades {
        LotGrades::FieldRun { field_run_kg } => field_run_kg,
        _ => Decimal::ZERO,
    };
    lot.total_kg = retained;
    lot.grades = LotGrades::Stored {
        field_run_kg,
        stored_kg: retained,
    };
    lot
}

/// Split the stored lot into product streams according to the configured
/// fractions
///
/// Replaces the grade breakdown wholesale; the field-run and stored
/// figures are discarded. The four stream fractions are applied to the
/// post-loss remainder, so they only conserve mass when they sum to 1.
pub fn grade(mut lot: HarvestLot, config: &GradingConfig) -> HarvestLot {
    if lot.total_kg <= Decimal::ZERO {
        lot.notes.push("No fruit to grade.".to_string());
        return lot;
    }

    let remainder = Decimal::ONE - config.processing_loss_fraction;
    lot.grades = LotGrades::Graded(GradeSplit {
        dessert_kg: lot.total_kg * config.dessert_fraction * remainder,
        cooking_kg: lot.total_kg * config.cooking_fraction * remainder,
        cider_kg: lot.total_kg * config.cider_fraction * remainder,
        juice_kg: lot.total_kg * config.juice_fraction * remainder,
        loss_kg: lot.total_kg * config.processing_loss_fraction,
    });
    lot.notes.push("Harvest graded into product streams.".to_string());
    lot
}

/// Execute picking, storage, and grading
pub fn run_harvest(block: &OrchardBlock, config: &HarvestConfig) -> HarvestLot {
    let lot = pick(block, &config.picking);
    let lot = store(lot, &config.storage);
    let lot = grade(lot, &config.grading);
    tracing::debug!(total_kg = %lot.total_kg, "harvesting group complete");
    lot
}
