//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductRecord  │   │   StockEntry    │   │   StockChange   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  sku (unique)   │   │  New            │   │  Inserted       │       │
//! │  │  name           │   │  TopUp(Option)  │   │  ToppedUp       │       │
//! │  │  quantity > 0   │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    Listing      │   Empty is distinct from a non-empty listing      │
//! │  │  Empty          │   so callers can print "Inventory is empty."      │
//! │  │  Records(&[..]) │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Product Record
// =============================================================================

/// A product held in the inventory.
///
/// ## Invariants
/// - `sku` is unique within a store
/// - `quantity` is always > 0 while the record is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Stock Keeping Unit - the business identifier.
    pub sku: String,

    /// Display name shown in listings and searches.
    pub name: String,

    /// Units on hand.
    pub quantity: i64,
}

impl ProductRecord {
    /// Creates a record without validating it.
    ///
    /// Only the store creates records that end up in the inventory, after
    /// validation.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, quantity: i64) -> Self {
        ProductRecord {
            sku: sku.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Case-insensitive substring match against the display name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

// =============================================================================
// Stock Entry
// =============================================================================

/// What the caller wants to happen for a given SKU.
///
/// ## Insert vs Top-up
/// ```text
/// SKU absent  ── New { name, quantity } ──► append record
/// SKU present ── TopUp(Some(n))        ──► quantity += n
/// SKU present ── TopUp(None)           ──► DuplicateRejected (declined)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockEntry<'a> {
    /// Create a new record.
    New { name: &'a str, quantity: i64 },

    /// Add to an existing record. `None` means the operator declined.
    TopUp(Option<i64>),
}

// =============================================================================
// Stock Change
// =============================================================================

/// Result of a successful insert-or-top-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockChange {
    /// A new record was appended.
    Inserted { sku: String, quantity: i64 },

    /// An existing record grew by `added`; `quantity` is the new total.
    ToppedUp {
        sku: String,
        added: i64,
        quantity: i64,
    },
}

// =============================================================================
// Listing
// =============================================================================

/// All holdings in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The store holds no records.
    Empty,

    /// At least one record, in insertion order.
    Records(&'a [ProductRecord]),
}

impl<'a> Listing<'a> {
    /// Wraps a slice, mapping an empty slice to [`Listing::Empty`].
    pub fn from_slice(records: &'a [ProductRecord]) -> Self {
        if records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(records)
        }
    }

    /// Records in the listing; empty for [`Listing::Empty`].
    pub fn records(&self) -> &'a [ProductRecord] {
        match *self {
            Listing::Empty => &[],
            Listing::Records(records) => records,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
