//! # Validation Module
//!
//! Input validation for operator-supplied fields.
//!
//! The command loop calls these right after reading each field so it can
//! stop at the first bad one. `InventoryStore::insert_or_top_up` runs the
//! same checks again on the whole entry.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_quantity, validate_sku};
//!
//! assert_eq!(validate_sku("  A1 ").unwrap(), "A1");
//! assert_eq!(parse_quantity(" 10 ").unwrap(), 10);
//! assert!(parse_quantity("ten").is_err());
//! ```

use std::num::IntErrorKind;

use crate::error::{InventoryError, InventoryResult, QuantityIssue};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU and returns it trimmed.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty afterwards
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_sku;
///
/// assert!(validate_sku("BOLT-10").is_ok());
/// assert!(validate_sku("   ").is_err());
/// ```
pub fn validate_sku(sku: &str) -> InventoryResult<&str> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(InventoryError::EmptyIdentifier);
    }

    Ok(sku)
}

/// Validates a product name and returns it trimmed.
pub fn validate_product_name(name: &str) -> InventoryResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(InventoryError::EmptyName);
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Zero and negative amounts are rejected, never clamped.
pub fn validate_quantity(qty: i64) -> InventoryResult<i64> {
    if qty <= 0 {
        return Err(QuantityIssue::NotPositive { value: qty }.into());
    }

    Ok(qty)
}

/// Parses operator text into a positive quantity.
///
/// ## Flow
/// ```text
/// "  15 " ──trim──► "15" ──parse──► 15 ──validate_quantity──► Ok(15)
///                      │                     │
///                      ▼                     ▼
///         NotANumber / Overflow /       NotPositive
///          NegativeOverflow
/// ```
///
/// Integers outside the `i64` range are still integers: too large is
/// `Overflow`, too small is `NegativeOverflow`.
pub fn parse_quantity(input: &str) -> InventoryResult<i64> {
    let trimmed = input.trim();

    let qty = match trimmed.parse::<i64>() {
        Ok(qty) => qty,
        Err(err) => {
            let input = trimmed.to_string();
            let issue = match err.kind() {
                IntErrorKind::PosOverflow => QuantityIssue::Overflow,
                IntErrorKind::NegOverflow => QuantityIssue::NegativeOverflow { input },
                _ => QuantityIssue::NotANumber { input },
            };
            return Err(issue.into());
        }
    };

    validate_quantity(qty)
}

// =============================================================================
// Unit Tests
// =============================================================================
