//! Stage transformations for the five production chain groups
//!
//! Each stage consumes its entity, applies deterministic arithmetic, and
//! returns the updated value. The output of a stage is the sole live
//! reference going forward; nothing mutates a prior group's entity.

pub mod distribution;
pub mod harvesting;
pub mod nursery;
pub mod orchard;
pub mod processing;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Truncate a derived tree figure back to a whole-tree count
pub(crate) fn whole_trees(value: Decimal) -> i64 {
    value.floor().to_i64().unwrap_or(0)
}
