//! Harvest lot models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Grade;

/// Harvested apples tracked through picking, storage, and grading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestLot {
    pub id: Uuid,
    pub total_kg: Decimal,
    pub grades: LotGrades,
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Shape of the lot's grade breakdown at each harvesting stage
///
/// The set of tracked figures changes per stage, so each stage gets its
/// own fixed-shape variant instead of a generic string-keyed map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "stage")]
pub enum LotGrades {
    /// Nothing picked (non-fruiting block)
    Empty,
    /// Straight off the trees, before storage
    FieldRun { field_run_kg: Decimal },
    /// After storage decay has been applied
    Stored {
        field_run_kg: Decimal,
        stored_kg: Decimal,
    },
    /// Final split into product streams
    Graded(GradeSplit),
}

/// Final grade split produced by the grading stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GradeSplit {
    pub dessert_kg: Decimal,
    pub cooking_kg: Decimal,
    pub cider_kg: Decimal,
    pub juice_kg: Decimal,
    pub loss_kg: Decimal,
}

impl GradeSplit {
    /// Sum across all five streams, loss included
    pub fn total(&self) -> Decimal {
        self.dessert_kg + self.cooking_kg + self.cider_kg + self.juice_kg + self.loss_kg
    }
}

impl HarvestLot {
    /// Create an empty lot for a block with no fruit
    pub fn empty() -> Self {
        Self::with_total(Decimal::ZERO, LotGrades::Empty)
    }

    pub fn with_total(total_kg: Decimal, grades: LotGrades) -> Self {
        Self {
            id: Uuid::new_v4(),
            total_kg,
            grades,
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Kilograms available for a product stream, zero if the lot has not
    /// been graded yet
    pub fn grade_kg(&self, grade: Grade) -> Decimal {
        match &self.grades {
            LotGrades::Graded(split) => match grade {
                Grade::Dessert => split.dessert_kg,
                Grade::Cooking => split.cooking_kg,
                Grade::Cider => split.cider_kg,
                Grade::Juice => split.juice_kg,
            },
            _ => Decimal::ZERO,
        }
    }
}
