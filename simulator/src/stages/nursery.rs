//! Nursery stages: rootstock selection through quality control

use rust_decimal::Decimal;
use shared::{BatchStatus, NurseryBatch, WeatherSnapshot};

use super::whole_trees;
use crate::config::{
    GraftingConfig, NurseryConfig, PropagationConfig, QualityControlConfig, RootstockConfig,
};

/// Select rootstock material based on weather risk tolerance
///
/// Procurement cost is charged on the full target count even when the
/// risk factor scales the order back. The scaled count never drops below
/// half the target, however severe the outlook.
pub fn select_rootstock(config: &RootstockConfig, weather: &WeatherSnapshot) -> NurseryBatch {
    let mut batch = NurseryBatch::new(config.target_trees);
    batch.cost.add(
        "rootstock",
        Decimal::from(config.target_trees) * config.cost_per_tree,
    );
    batch.notes.push(format!("Weather outlook: {}", weather.description));

    if weather.risk_factor > config.weather_risk_threshold {
        batch
            .notes
            .push("Procurement scaled back due to weather risk.".to_string());
        let reduced = whole_trees(
            Decimal::from(config.target_trees) * (Decimal::ONE - weather.risk_factor),
        );
        let half = whole_trees(Decimal::from(config.target_trees) * Decimal::new(5, 1));
        batch.trees = reduced.max(half);
    } else {
        batch
            .notes
            .push("Weather suitable for full procurement.".to_string());
    }

    batch
}

/// Propagate the selected rootstock and update survival numbers
///
/// Weather risk dampens survival at a fifth of its face value; irrigation
/// and mulch costs follow the surviving count, not the starting one.
pub fn propagate(
    mut batch: NurseryBatch,
    config: &PropagationConfig,
    weather: &WeatherSnapshot,
) -> NurseryBatch {
    let weather_dampening = Decimal::ONE - weather.risk_factor * Decimal::new(2, 1);
    let survived = whole_trees(
        Decimal::from(batch.trees) * config.survival_rate * weather_dampening,
    );
    batch.cost.add(
        "irrigation",
        Decimal::from(survived) * config.irrigation_cost_per_tree,
    );
    batch.cost.add(
        "mulch",
        Decimal::from(survived) * config.mulch_cost_per_tree,
    );
    batch.notes.push(format!(
        "Propagation complete with survival rate {}; weather modifier {}.",
        config.survival_rate, weather.risk_factor
    ));
    batch.trees = survived;
    batch
}

/// Apply cultivar grafting and update the tree count based on success
///
/// Labour is charged per graft attempted; pruning only on the unions
/// that took.
pub fn graft(mut batch: NurseryBatch, config: &GraftingConfig) -> NurseryBatch {
    let successful = whole_trees(Decimal::from(batch.trees) * config.success_rate);
    batch.cost.add(
        "grafting_labour",
        Decimal::from(batch.trees) * config.labour_cost_per_tree,
    );
    batch.cost.add(
        "pruning",
        Decimal::from(successful) * config.pruning_cost_per_tree,
    );
    batch.notes.push(format!(
        "Grafted cultivar {} with {} successful unions.",
        config.cultivar_name, successful
    ));
    batch.trees = successful;
    batch
}

/// Inspect the batch and flag it as accepted or rejected
///
/// The status is informational only; a rejected batch still flows through
/// every downstream group.
pub fn inspect(mut batch: NurseryBatch, config: &QualityControlConfig) -> NurseryBatch {
    let rejected = whole_trees(Decimal::from(batch.trees) * config.rejection_rate);
    let accepted = batch.trees - rejected;
    batch.notes.push(format!(
        "Quality control removed {} trees; {} ready for orchard.",
        rejected, accepted
    ));
    batch.trees = accepted;

    if accepted >= config.min_trees {
        batch.status = BatchStatus::Accepted;
        batch
            .notes
            .push("Batch accepted for delivery to orchard.".to_string());
    } else {
        batch.status = BatchStatus::Rejected;
        batch
            .notes
            .push("Batch rejected; sent to mulch/waste stream.".to_string());
    }

    batch
}

/// Execute the nursery pipeline and return the resulting batch
pub fn run_nursery(config: &NurseryConfig, weather: &WeatherSnapshot) -> NurseryBatch {
    let batch = select_rootstock(&config.rootstock, weather);
    let batch = propagate(batch, &config.propagation, weather);
    let batch = graft(batch, &config.grafting);
    let batch = inspect(batch, &config.quality);
    tracing::debug!(
        trees = batch.trees,
        status = %batch.status,
        cost = %batch.cost.total(),
        "nursery group complete"
    );
    batch
}
