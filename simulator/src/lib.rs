//! Apple Farm Production Chain Simulator
//!
//! Deterministic simulation of a linear agricultural production chain:
//! nursery propagation, orchard growth, harvesting, processing, and
//! distribution. Converts tree counts and a weather outlook into a final
//! report of products, costs, and waste.

pub mod config;
pub mod error;
pub mod farm;
pub mod reporting;
pub mod stages;

pub use config::Config;
pub use error::{FarmError, FarmResult};
pub use farm::AppleFarm;
pub use reporting::{summarise, ReportSummary};
