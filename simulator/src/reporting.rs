//! Headline figures derived from a finished run

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{BatchStatus, FarmReport, LotGrades};

/// Read-only summary compiled from a complete report
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub batch_status: BatchStatus,
    /// Nursery and orchard costs combined
    pub total_cost: Decimal,
    /// Sum of product quantities across units
    pub total_product_quantity: Decimal,
    /// Grading loss, processing waste, and distribution storage losses
    pub total_waste_kg: Decimal,
    pub unsold_kg: Decimal,
}

/// Compile headline figures from a finished report
pub fn summarise(report: &FarmReport) -> ReportSummary {
    let grading_loss = match &report.harvest.grades {
        LotGrades::Graded(split) => split.loss_kg,
        _ => Decimal::ZERO,
    };
    let processing_waste: Decimal = report.processed_goods.iter().map(|p| p.waste_kg).sum();

    ReportSummary {
        batch_status: report.nursery.status,
        total_cost: report.nursery.cost.total() + report.orchard.costs.total(),
        total_product_quantity: report.processed_goods.iter().map(|p| p.quantity).sum(),
        total_waste_kg: grading_loss + processing_waste + report.distribution.storage_losses_kg,
        unsold_kg: report.distribution.unsold_kg,
    }
}
