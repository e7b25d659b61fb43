//! Common types used across the production chain

use serde::{Deserialize, Serialize};

/// Status of a batch travelling through the chain
///
/// Set exactly once by nursery quality control; `Pending` until then.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStatus::Pending => write!(f, "Pending"),
            BatchStatus::Accepted => write!(f, "Accepted"),
            BatchStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Product streams a graded harvest lot can be routed to
///
/// Loss is tracked separately on the grade split and is not a feedstock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Dessert,
    Cooking,
    Cider,
    Juice,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Dessert => write!(f, "Dessert"),
            Grade::Cooking => write!(f, "Cooking"),
            Grade::Cider => write!(f, "Cider"),
            Grade::Juice => write!(f, "Juice"),
        }
    }
}

/// Unit of measure for a processed product quantity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    Kilograms,
    Litres,
}

impl std::fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductUnit::Kilograms => write!(f, "kg"),
            ProductUnit::Litres => write!(f, "litres"),
        }
    }
}
