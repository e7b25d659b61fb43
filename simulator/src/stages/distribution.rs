//! Distribution stage covering storage, transport, and consumers

use rust_decimal::Decimal;
use shared::{DistributionBatch, ProcessedProduct};

use crate::config::DistributionConfig;

/// Simulate the distribution chain to consumers
///
/// Product quantities are summed across units without conversion (kg and
/// litres alike), matching how the domain model accounts for dispatch
/// volume.
pub fn distribute(
    products: Vec<ProcessedProduct>,
    config: &DistributionConfig,
) -> DistributionBatch {
    let total_quantity: Decimal = products.iter().map(|p| p.quantity).sum();
    let storage_losses = total_quantity * config.storage_decay_fraction;
    let transported = total_quantity - storage_losses;
    let delivered = transported * (Decimal::ONE - config.transport_loss_fraction);
    let unsold = (delivered - config.consumer_demand_kg).max(Decimal::ZERO);

    let mut batch = DistributionBatch::new(
        products,
        storage_losses,
        config.consumer_demand_kg,
        unsold,
    );
    batch.notes.push(format!(
        "Stored products with decay fraction {}.",
        config.storage_decay_fraction
    ));
    batch
        .notes
        .push("Transported goods to retailers and consumers.".to_string());
    if unsold > Decimal::ZERO {
        batch
            .notes
            .push("Unsold product directed to waste stream.".to_string());
    }

    tracing::debug!(
        delivered = %delivered,
        unsold = %unsold,
        "distribution stage complete"
    );
    batch
}
