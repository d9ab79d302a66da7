//! # Text Rendering
//!
//! Turns store results and errors into the lines the operator sees.
//! Every function returns text without a trailing newline; the session
//! adds it.

use stockroom_core::{InventoryError, ProductRecord, QuantityIssue, StockChange};

use crate::error::CliError;
use crate::menu::MenuChoice;

pub const CHOICE_PROMPT: &str = "Enter your choice (1-6): ";
pub const EMPTY_INVENTORY: &str = "Inventory is empty.";
pub const EXIT_MESSAGE: &str = "Exiting Inventory Manager.";
pub const SKU_MISS: &str = "Product not found.";
pub const NAME_MISS: &str = "No products found with that name.";

const SKU_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const QTY_WIDTH: usize = 10;

/// Main menu, preceded by a blank line.
pub fn menu() -> String {
    let mut lines = vec![String::new(), "Inventory Stock Manager".to_string()];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| format!("{}. {}", choice.key(), choice.label())),
    );
    lines.join("\n")
}

/// Full inventory table, framed by blank lines.
///
/// ```text
///
/// Current Inventory:
/// SKU       Product Name        Quantity
/// ----------------------------------------
/// A1        Bolt                10
///
/// ```
pub fn inventory_table(records: &[ProductRecord]) -> String {
    let mut lines = vec![
        String::new(),
        "Current Inventory:".to_string(),
        format!(
            "{:<SKU_WIDTH$}{:<NAME_WIDTH$}{:<QTY_WIDTH$}",
            "SKU", "Product Name", "Quantity"
        ),
        "-".repeat(SKU_WIDTH + NAME_WIDTH + QTY_WIDTH),
    ];
    lines.extend(records.iter().map(|r| {
        format!(
            "{:<SKU_WIDTH$}{:<NAME_WIDTH$}{:<QTY_WIDTH$}",
            r.sku, r.name, r.quantity
        )
    }));
    lines.push(String::new());
    lines.join("\n")
}

/// One-line summary used by both searches.
pub fn summary(record: &ProductRecord) -> String {
    format!("{} - {} - Qty: {}", record.sku, record.name, record.quantity)
}

/// Result of a SKU search.
pub fn sku_search(found: Option<&ProductRecord>) -> String {
    match found {
        Some(record) => format!("Found: {}", summary(record)),
        None => SKU_MISS.to_string(),
    }
}

/// Result of a name search, one line per match.
pub fn name_search(matches: &[&ProductRecord]) -> String {
    if matches.is_empty() {
        return NAME_MISS.to_string();
    }
    matches
        .iter()
        .map(|record| summary(record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Confirmation for a successful insert or top-up.
pub fn stock_change(change: &StockChange) -> String {
    match change {
        StockChange::Inserted { .. } => "Product inserted successfully.".to_string(),
        StockChange::ToppedUp { .. } => "Quantity updated successfully.".to_string(),
    }
}

/// Confirmation for a deletion.
pub fn removed(record: &ProductRecord) -> String {
    format!("Product {} removed from inventory.", record.name)
}

/// Operator-facing line for a rejected operation.
pub fn error_line(err: &CliError) -> String {
    match err {
        CliError::Inventory(inner) => inventory_error_line(inner),
        CliError::InvalidChoice(_) => "Invalid choice. Please select from 1 to 6.".to_string(),
        CliError::InputClosed | CliError::Io(_) => format!("Error: {err}"),
    }
}

fn inventory_error_line(err: &InventoryError) -> String {
    match err {
        InventoryError::EmptyIdentifier => "Error: SKU cannot be empty.".to_string(),
        InventoryError::EmptyName => "Error: Product name cannot be empty.".to_string(),
        InventoryError::InvalidQuantity(QuantityIssue::NotANumber { .. }) => {
            "Invalid input. Quantity must be a number.".to_string()
        }
        InventoryError::InvalidQuantity(
            QuantityIssue::NotPositive { .. } | QuantityIssue::NegativeOverflow { .. },
        ) => "Error: Quantity must be positive.".to_string(),
        InventoryError::InvalidQuantity(QuantityIssue::Overflow) => {
            "Error: Quantity is too large.".to_string()
        }
        InventoryError::DuplicateRejected { .. } => "Duplicate SKU rejected.".to_string(),
        InventoryError::CapacityReached { max } => {
            format!("Error: Inventory capacity of {max} reached!")
        }
        InventoryError::NotFound { .. } => SKU_MISS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_all_choices() {
        let menu = menu();
        assert!(menu.starts_with("\nInventory Stock Manager\n1. Insert / Update Product"));
        assert!(menu.ends_with("5. Delete Product\n6. Exit"));
    }

    #[test]
    fn test_inventory_table_layout() {
        let records = vec![
            ProductRecord::new("A1", "Bolt", 10),
            ProductRecord::new("W7", "Blue Widget", 4),
        ];
        let table = inventory_table(&records);
        let lines: Vec<&str> = table.split('\n').collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Current Inventory:");
        assert_eq!(lines[2], "SKU       Product Name        Quantity  ");
        assert_eq!(lines[3], "-".repeat(40));
        assert_eq!(lines[4], "A1        Bolt                10        ");
        assert_eq!(lines[5], "W7        Blue Widget         4         ");
        assert_eq!(lines[6], "");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_search_lines() {
        let record = ProductRecord::new("A1", "Bolt", 15);
        assert_eq!(sku_search(Some(&record)), "Found: A1 - Bolt - Qty: 15");
        assert_eq!(sku_search(None), "Product not found.");

        let other = ProductRecord::new("A2", "Bolt Cutter", 1);
        assert_eq!(
            name_search(&[&record, &other]),
            "A1 - Bolt - Qty: 15\nA2 - Bolt Cutter - Qty: 1"
        );
        assert_eq!(name_search(&[]), "No products found with that name.");
    }

    #[test]
    fn test_error_lines() {
        let line = |err: InventoryError| error_line(&CliError::from(err));

        assert_eq!(line(InventoryError::EmptyIdentifier), "Error: SKU cannot be empty.");
        assert_eq!(
            line(InventoryError::CapacityReached { max: 2 }),
            "Error: Inventory capacity of 2 reached!"
        );
        assert_eq!(
            line(QuantityIssue::NotANumber { input: "x".to_string() }.into()),
            "Invalid input. Quantity must be a number."
        );
        assert_eq!(
            line(QuantityIssue::NotPositive { value: 0 }.into()),
            "Error: Quantity must be positive."
        );
        assert_eq!(
            line(
                QuantityIssue::NegativeOverflow {
                    input: "-99999999999999999999".to_string()
                }
                .into()
            ),
            "Error: Quantity must be positive."
        );
        assert_eq!(line(QuantityIssue::Overflow.into()), "Error: Quantity is too large.");
        assert_eq!(
            line(InventoryError::DuplicateRejected { sku: "A1".to_string() }),
            "Duplicate SKU rejected."
        );
        assert_eq!(
            error_line(&CliError::InvalidChoice("9".to_string())),
            "Invalid choice. Please select from 1 to 6."
        );
    }
}
