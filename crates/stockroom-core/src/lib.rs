//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate holds the inventory records and every rule for changing them,
//! as plain Rust with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Operator (terminal)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ stdin / stdout                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockroom-cli (Command Loop)                      │   │
//! │  │    menu ──► prompts ──► store call ──► rendered line            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut InventoryStore                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │   error   │  │ validation│  │   │
//! │  │   │  Record   │  │ Inventory │  │ Inventory │  │   sku     │  │   │
//! │  │   │  Entry    │  │   Store   │  │   Error   │  │ quantity  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • IN-MEMORY ONLY                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductRecord, StockEntry, Listing)
//! - [`store`] - The inventory store and its operations
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation and quantity parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{InventoryStore, StockEntry};
//!
//! let mut store = InventoryStore::with_capacity_limit(Some(10));
//! store
//!     .insert_or_top_up("W7", StockEntry::New { name: "Blue Widget", quantity: 4 })
//!     .unwrap();
//!
//! assert_eq!(store.find_by_name("widget").len(), 1);
//! assert_eq!(store.find_by_name("BLUE").len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{InventoryError, InventoryResult, QuantityIssue};
pub use store::InventoryStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Record limit used when none is configured.
///
/// Set `STOCKROOM_MAX_CAPACITY=unlimited` in the CLI to lift it.
pub const DEFAULT_MAX_RECORDS: usize = 100;
