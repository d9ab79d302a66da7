//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! None of these end a session. The command loop prints one line for each
//! and shows the menu again. `stockroom-cli` wraps [`InventoryError`] in its
//! own `CliError` next to menu and terminal failures.

use thiserror::Error;

// =============================================================================
// Inventory Error
// =============================================================================

/// Errors raised by the inventory store and its validators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// SKU was empty after trimming.
    #[error("SKU cannot be empty")]
    EmptyIdentifier,

    /// Product name was empty after trimming.
    #[error("Product name cannot be empty")]
    EmptyName,

    /// Quantity could not be parsed, was not positive, or overflowed.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(QuantityIssue),

    /// The SKU already exists and no top-up was applied.
    ///
    /// ## When This Occurs
    /// - Operator answered anything but `y` to the top-up prompt
    /// - A new-product entry was submitted for an existing SKU
    ///
    /// Both cases share this variant on purpose; callers cannot tell them apart.
    #[error("Duplicate SKU rejected: {sku}")]
    DuplicateRejected { sku: String },

    /// The store already holds its maximum number of records.
    #[error("Inventory capacity of {max} reached")]
    CapacityReached { max: usize },

    /// No record carries this SKU.
    #[error("Product not found: {sku}")]
    NotFound { sku: String },
}

// =============================================================================
// Quantity Issue
// =============================================================================

/// Why a quantity was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityIssue {
    /// Input text is not an integer.
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    /// Zero or negative.
    #[error("{value} is not positive")]
    NotPositive { value: i64 },

    /// Negative and too far below zero to hold in an `i64`.
    #[error("'{input}' is not positive")]
    NegativeOverflow { input: String },

    /// The amount, or a top-up total, is larger than an `i64` can hold.
    #[error("exceeds {}", i64::MAX)]
    Overflow,
}

impl From<QuantityIssue> for InventoryError {
    fn from(issue: QuantityIssue) -> Self {
        InventoryError::InvalidQuantity(issue)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================
