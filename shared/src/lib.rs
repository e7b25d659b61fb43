//! Shared types and models for the Apple Farm Production Chain Simulator
//!
//! This crate contains the domain entities threaded through the production
//! chain, from nursery rootstock material to the final distribution batch.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
