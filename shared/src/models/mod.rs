//! Domain models for the apple farm production chain

mod cost;
mod distribution;
mod harvest;
mod nursery;
mod orchard;
mod processing;
mod report;
mod weather;

pub use cost::*;
pub use distribution::*;
pub use harvest::*;
pub use nursery::*;
pub use orchard::*;
pub use processing::*;
pub use report::*;
pub use weather::*;
