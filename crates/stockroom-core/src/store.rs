//! # Inventory Store
//!
//! The ordered collection of product records and the rules for changing it.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Store Operations                           │
//! │                                                                         │
//! │  Menu Choice            Store Method               Record Change        │
//! │  ───────────            ────────────               ─────────────        │
//! │                                                                         │
//! │  1 Insert / Update ───► insert_or_top_up() ──────► push / qty += n     │
//! │                                                                         │
//! │  2 Display ───────────► list_all() ──────────────► (read only)         │
//! │                                                                         │
//! │  3 Search by SKU ─────► find_by_sku() ───────────► (read only)         │
//! │                                                                         │
//! │  4 Search by Name ────► find_by_name() ──────────► (read only)         │
//! │                                                                         │
//! │  5 Delete ────────────► remove() ────────────────► records.remove(i)   │
//! │                                                                         │
//! │  NOTE: All lookups are linear scans in insertion order.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::{InventoryError, InventoryResult, QuantityIssue};
use crate::types::{Listing, ProductRecord, StockChange, StockEntry};
use crate::validation::{validate_product_name, validate_quantity, validate_sku};

/// In-memory inventory, optionally bounded.
///
/// ## Invariants
/// - Records are unique by `sku`
/// - Every stored quantity is > 0
/// - `records.len() <= max_records` when a maximum is set
///
/// ## Usage
/// ```rust
/// use stockroom_core::{InventoryStore, StockEntry};
///
/// let mut store = InventoryStore::with_capacity_limit(Some(100));
/// store
///     .insert_or_top_up("A1", StockEntry::New { name: "Bolt", quantity: 10 })
///     .unwrap();
/// store.insert_or_top_up("A1", StockEntry::TopUp(Some(5))).unwrap();
///
/// assert_eq!(store.find_by_sku("A1").unwrap().quantity, 15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    records: Vec<ProductRecord>,
    max_records: Option<usize>,
}

impl InventoryStore {
    /// Creates an empty store with no upper bound.
    pub fn new() -> Self {
        InventoryStore::default()
    }

    /// Creates an empty store holding at most `max_records` records
    /// (`None` means unlimited).
    pub fn with_capacity_limit(max_records: Option<usize>) -> Self {
        InventoryStore {
            records: Vec::new(),
            max_records,
        }
    }

    /// The configured maximum, if any.
    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fails with `CapacityReached` when the store is full.
    ///
    /// A full store refuses top-ups as well as new records, so the command
    /// loop calls this before it asks for anything.
    pub fn ensure_capacity(&self) -> InventoryResult<()> {
        match self.max_records {
            Some(max) if self.records.len() >= max => {
                debug!(max, "Inventory at capacity");
                Err(InventoryError::CapacityReached { max })
            }
            _ => Ok(()),
        }
    }

    /// Exact-match lookup by SKU.
    pub fn find_by_sku(&self, sku: &str) -> Option<&ProductRecord> {
        let found = self.records.iter().find(|r| r.sku == sku);
        debug!(sku = %sku, found = found.is_some(), "Lookup by SKU");
        found
    }

    /// Case-insensitive substring search on display names, in store order.
    ///
    /// An empty query matches every record.
    pub fn find_by_name(&self, query: &str) -> Vec<&ProductRecord> {
        let matches: Vec<&ProductRecord> = self
            .records
            .iter()
            .filter(|r| r.name_contains(query))
            .collect();
        debug!(query = %query, count = matches.len(), "Search by name");
        matches
    }

    /// Inserts a new record or tops up an existing one.
    ///
    /// ## Validation Order
    /// ```text
    /// capacity ──► sku ──► exists? ──yes──► TopUp(Some(n > 0)) ──► qty += n
    ///                         │
    ///                         no
    ///                         ▼
    ///                  New { name, qty > 0 } ──► push
    /// ```
    ///
    /// ## Errors
    /// - `CapacityReached` if the store is full (checked first)
    /// - `EmptyIdentifier` / `EmptyName` for blank fields
    /// - `InvalidQuantity` for non-positive amounts or an overflowing total
    /// - `DuplicateRejected` for an existing SKU without a top-up
    /// - `NotFound` for a top-up of an absent SKU
    ///
    /// The store is unchanged whenever an error is returned.
    pub fn insert_or_top_up(
        &mut self,
        sku: &str,
        entry: StockEntry<'_>,
    ) -> InventoryResult<StockChange> {
        self.ensure_capacity()?;
        let sku = validate_sku(sku)?;

        if let Some(record) = self.records.iter_mut().find(|r| r.sku == sku) {
            let added = match entry {
                StockEntry::TopUp(Some(amount)) => validate_quantity(amount)?,
                StockEntry::TopUp(None) | StockEntry::New { .. } => {
                    debug!(sku = %sku, "Duplicate SKU rejected");
                    return Err(InventoryError::DuplicateRejected {
                        sku: sku.to_string(),
                    });
                }
            };

            record.quantity = record
                .quantity
                .checked_add(added)
                .ok_or(QuantityIssue::Overflow)?;

            info!(sku = %sku, added, quantity = record.quantity, "Quantity topped up");
            return Ok(StockChange::ToppedUp {
                sku: sku.to_string(),
                added,
                quantity: record.quantity,
            });
        }

        let (name, quantity) = match entry {
            StockEntry::New { name, quantity } => {
                (validate_product_name(name)?, validate_quantity(quantity)?)
            }
            StockEntry::TopUp(_) => {
                return Err(InventoryError::NotFound {
                    sku: sku.to_string(),
                })
            }
        };

        self.records.push(ProductRecord::new(sku, name, quantity));

        info!(sku = %sku, name = %name, quantity, "Product inserted");
        Ok(StockChange::Inserted {
            sku: sku.to_string(),
            quantity,
        })
    }

    /// Removes the record with this SKU and returns it.
    pub fn remove(&mut self, sku: &str) -> InventoryResult<ProductRecord> {
        let Some(index) = self.records.iter().position(|r| r.sku == sku) else {
            debug!(sku = %sku, "Remove of unknown SKU");
            return Err(InventoryError::NotFound {
                sku: sku.to_string(),
            });
        };

        let removed = self.records.remove(index);
        info!(sku = %removed.sku, name = %removed.name, "Product removed");
        Ok(removed)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Listing<'_> {
        Listing::from_slice(&self.records)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
