//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A weather outlook shared by the nursery and orchard stages
///
/// Read-only input; no stage mutates it. The risk factor is a
/// probability-like modifier in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub risk_factor: Decimal,
}

impl WeatherSnapshot {
    pub fn new(description: impl Into<String>, risk_factor: Decimal) -> Self {
        Self {
            description: description.into(),
            risk_factor,
        }
    }
}
