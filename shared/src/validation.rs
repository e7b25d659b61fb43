//! Validation utilities for farm configuration values
//!
//! Stage functions never validate or fail; these helpers are applied once
//! when a configuration is constructed.

use rust_decimal::Decimal;

/// Validate a fraction or rate lies in [0, 1]
pub fn validate_fraction(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Fraction cannot be negative");
    }
    if value > Decimal::ONE {
        return Err("Fraction cannot exceed 1");
    }
    Ok(())
}

/// Validate a cost, capacity, or demand figure is non-negative
pub fn validate_non_negative(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Value cannot be negative");
    }
    Ok(())
}

/// Validate a tree or day count is non-negative
pub fn validate_count(value: i64) -> Result<(), &'static str> {
    if value < 0 {
        return Err("Count cannot be negative");
    }
    Ok(())
}

/// Validate the four grade fractions individually
///
/// The fractions are not required to sum to 1; under-allocation simply
/// leaves fruit unrouted and over-allocation inflates the split.
pub fn validate_grade_fractions(
    dessert: Decimal,
    cooking: Decimal,
    cider: Decimal,
    juice: Decimal,
) -> Result<(), &'static str> {
    for fraction in [dessert, cooking, cider, juice] {
        validate_fraction(fraction)?;
    }
    Ok(())
}
