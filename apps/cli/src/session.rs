//! # Command Loop
//!
//! One state (await-choice), six transitions.
//!
//! ## Loop Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session::run                                    │
//! │                                                                         │
//! │   print menu ──► read choice ──► dispatch ──► Flow::Continue ──┐        │
//! │        ▲               │             │                          │        │
//! │        │               │             ├── Flow::Exit ──► return  │        │
//! │        │               │             │                          │        │
//! │        │               ▼             ▼                          │        │
//! │        │        InvalidChoice   Inventory error                 │        │
//! │        │               └──────┬──────┘                          │        │
//! │        │                      ▼                                 │        │
//! │        │              render::error_line                        │        │
//! │        └──────────────────────┴─────────────────────────────────┘        │
//! │                                                                         │
//! │   End of input ends the loop quietly; I/O failures go back to main.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::validation::{parse_quantity, validate_product_name, validate_sku};
use stockroom_core::{InventoryStore, Listing, StockEntry};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::menu::MenuChoice;
use crate::render;

/// What the loop does after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive session over one store.
///
/// Generic over its input and output so tests can drive it with in-memory
/// buffers.
///
/// ## Usage
/// ```rust
/// use std::io::Cursor;
/// use stockroom_cli::Session;
/// use stockroom_core::InventoryStore;
///
/// let mut store = InventoryStore::new();
/// let input = Cursor::new("1\nA1\nBolt\n10\n6\n");
/// let mut output = Vec::new();
///
/// Session::new(&mut store, input, &mut output).run().unwrap();
/// assert_eq!(store.find_by_sku("A1").unwrap().quantity, 10);
/// ```
pub struct Session<'s, R, W> {
    store: &'s mut InventoryStore,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Session<'s, R, W> {
    /// Creates a session over `store`, reading from `input` and writing to `output`.
    pub fn new(store: &'s mut InventoryStore, input: R, output: W) -> Self {
        Session {
            store,
            input,
            output,
        }
    }

    /// Runs until the operator picks Exit or input ends.
    ///
    /// Only I/O failures are returned; every other error is reported to the
    /// operator and the menu is shown again.
    pub fn run(mut self) -> CliResult<()> {
        info!(max_records = ?self.store.max_records(), "Inventory session started");

        loop {
            let menu = render::menu();
            self.say(&menu)?;

            let step = self
                .prompt(render::CHOICE_PROMPT)
                .and_then(|raw| raw.parse::<MenuChoice>())
                .and_then(|choice| self.dispatch(choice));

            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CliError::InputClosed) => {
                    debug!("Input closed, leaving menu");
                    writeln!(self.output)?;
                    break;
                }
                Err(err) if err.is_recoverable() => self.report(&err)?,
                Err(err) => return Err(err),
            }
        }

        self.output.flush()?;
        info!(records = self.store.len(), "Inventory session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<Flow> {
        debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::InsertOrTopUp => self.insert_or_top_up(),
            MenuChoice::Display => self.display(),
            MenuChoice::SearchBySku => self.search_by_sku(),
            MenuChoice::SearchByName => self.search_by_name(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Exit => {
                self.say(render::EXIT_MESSAGE)?;
                Ok(Flow::Exit)
            }
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Each field is checked as soon as it is read; the first bad one ends
    /// the transition.
    fn insert_or_top_up(&mut self) -> CliResult<Flow> {
        self.store.ensure_capacity()?;

        let raw_sku = self.prompt("Enter SKU: ")?;
        let sku = validate_sku(&raw_sku)?;

        let change = if self.store.find_by_sku(sku).is_some() {
            let answer = self.prompt("Product exists. Update quantity? (y/n): ")?;
            let top_up = if answer.trim().eq_ignore_ascii_case("y") {
                Some(parse_quantity(&self.prompt("Enter new quantity to add: ")?)?)
            } else {
                None
            };
            self.store.insert_or_top_up(sku, StockEntry::TopUp(top_up))?
        } else {
            let raw_name = self.prompt("Enter Product Name: ")?;
            let name = validate_product_name(&raw_name)?;
            let quantity = parse_quantity(&self.prompt("Enter Quantity: ")?)?;
            self.store
                .insert_or_top_up(sku, StockEntry::New { name, quantity })?
        };

        self.say(&render::stock_change(&change))?;
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> CliResult<Flow> {
        let text = match self.store.list_all() {
            Listing::Empty => render::EMPTY_INVENTORY.to_string(),
            Listing::Records(records) => render::inventory_table(records),
        };
        self.say(&text)?;
        Ok(Flow::Continue)
    }

    fn search_by_sku(&mut self) -> CliResult<Flow> {
        let sku = self.prompt("Enter SKU to search: ")?;
        let text = render::sku_search(self.store.find_by_sku(sku.trim()));
        self.say(&text)?;
        Ok(Flow::Continue)
    }

    fn search_by_name(&mut self) -> CliResult<Flow> {
        let query = self.prompt("Enter product name to search: ")?;
        let text = render::name_search(&self.store.find_by_name(query.trim()));
        self.say(&text)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> CliResult<Flow> {
        let sku = self.prompt("Enter SKU to delete: ")?;
        let removed = self.store.remove(sku.trim())?;
        self.say(&render::removed(&removed))?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Terminal I/O
    // =========================================================================

    /// Writes `label` without a newline and reads one line, minus its line ending.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    fn prompt(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn report(&mut self, err: &CliError) -> CliResult<()> {
        debug!(error = %err, "Operation rejected");
        self.say(&render::error_line(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_core::ProductRecord;

    fn run_session(store: &mut InventoryStore, input: &str) -> String {
        run_session_bytes(store, input.as_bytes())
    }

    fn run_session_bytes(store: &mut InventoryStore, input: &[u8]) -> String {
        let mut output = Vec::new();
        Session::new(store, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_example_run() {
        let mut store = InventoryStore::new();
        let out = run_session(
            &mut store,
            "1\nA1\nBolt\n10\n2\n1\nA1\ny\n5\n3\nA1\n5\nA1\n2\n6\n",
        );

        assert!(out.contains("Product inserted successfully."));
        assert!(out.contains("A1        Bolt                10        "));
        assert!(out.contains("Quantity updated successfully."));
        assert!(out.contains("Found: A1 - Bolt - Qty: 15"));
        assert!(out.contains("Product Bolt removed from inventory."));
        assert!(out.contains("Inventory is empty."));
        assert!(out.ends_with("Exiting Inventory Manager.\n"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_prompt_order() {
        let mut store = InventoryStore::new();
        let out = run_session(&mut store, "1\nA1\nBolt\n10\n6\n");

        let sku = out.find("Enter SKU: ").unwrap();
        let name = out.find("Enter Product Name: ").unwrap();
        let qty = out.find("Enter Quantity: ").unwrap();
        assert!(sku < name && name < qty);
        assert!(out.starts_with("\nInventory Stock Manager\n"));
        assert!(out.contains("6. Exit\nEnter your choice (1-6): "));
    }

    #[test]
    fn test_declined_top_up() {
        let mut store = InventoryStore::new();
        let out = run_session(&mut store, "1\nA1\nBolt\n10\n1\nA1\nn\n6\n");

        assert!(out.contains("Product exists. Update quantity? (y/n): Duplicate SKU rejected."));
        assert!(!out.contains("Enter new quantity to add: "));
        assert_eq!(store.find_by_sku("A1").unwrap().quantity, 10);
    }

    #[test]
    fn test_invalid_quantities_keep_loop_alive() {
        let mut store = InventoryStore::new();
        let out = run_session(
            &mut store,
            "1\nA1\nBolt\nten\n1\nA1\nBolt\n0\n1\nA1\nBolt\n-2\n2\n6\n",
        );

        assert!(out.contains("Invalid input. Quantity must be a number."));
        assert_eq!(out.matches("Error: Quantity must be positive.").count(), 2);
        assert!(out.contains("Inventory is empty."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_out_of_range_quantities() {
        let mut store = InventoryStore::new();
        let out = run_session(
            &mut store,
            "1\nA1\nBolt\n99999999999999999999\n1\nB1\nNut\n-99999999999999999999\n6\n",
        );

        assert!(out.contains("Enter Quantity: Error: Quantity is too large."));
        assert!(out.contains("Enter Quantity: Error: Quantity must be positive."));
        assert!(!out.contains("Invalid input. Quantity must be a number."));
        assert!(out.ends_with("Exiting Inventory Manager.\n"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_top_up_amount() {
        let mut store = InventoryStore::new();
        let out = run_session(&mut store, "1\nA1\nBolt\n10\n1\nA1\nY\nabc\n1\nA1\ny\n-1\n6\n");

        assert!(out.contains("Invalid input. Quantity must be a number."));
        assert!(out.contains("Error: Quantity must be positive."));
        assert_eq!(store.find_by_sku("A1").unwrap().quantity, 10);
    }

    #[test]
    fn test_empty_fields_stop_the_transition() {
        let mut store = InventoryStore::new();
        let out = run_session(&mut store, "1\n   \n1\nA1\n\n6\n");

        assert!(out.contains("Enter SKU: Error: SKU cannot be empty."));
        assert!(out.contains("Enter Product Name: Error: Product name cannot be empty."));
        // The empty SKU never reached the name prompt.
        assert_eq!(out.matches("Enter Product Name: ").count(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_capacity_reported_before_sku_prompt() {
        let mut store = InventoryStore::with_capacity_limit(Some(1));
        let out = run_session(&mut store, "1\nA1\nBolt\n1\n1\n6\n");

        assert!(out.contains("Enter your choice (1-6): Error: Inventory capacity of 1 reached!"));
        assert_eq!(out.matches("Enter SKU: ").count(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_searches() {
        let mut store = InventoryStore::new();
        store
            .insert_or_top_up("W7", StockEntry::New { name: "Blue Widget", quantity: 4 })
            .unwrap();
        store
            .insert_or_top_up("W8", StockEntry::New { name: "Red Widget", quantity: 2 })
            .unwrap();

        let out = run_session(&mut store, "4\nwidget\n4\n BLUE \n4\ngear\n3\nw7\n3\n W8 \n6\n");

        assert!(out.contains("W7 - Blue Widget - Qty: 4\nW8 - Red Widget - Qty: 2\n"));
        assert_eq!(out.matches("W7 - Blue Widget - Qty: 4").count(), 2);
        assert!(out.contains("No products found with that name."));
        // SKU search is exact after trimming.
        assert!(out.contains("Enter SKU to search: Product not found."));
        assert!(out.contains("Found: W8 - Red Widget - Qty: 2"));
    }

    #[test]
    fn test_delete_unknown_sku() {
        let mut store = InventoryStore::new();
        store
            .insert_or_top_up("A1", StockEntry::New { name: "Bolt", quantity: 1 })
            .unwrap();

        let out = run_session(&mut store, "5\nZZ\n6\n");

        assert!(out.contains("Enter SKU to delete: Product not found."));
        assert_eq!(store.list_all().records(), &[ProductRecord::new("A1", "Bolt", 1)]);
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let mut store = InventoryStore::new();
        let out = run_session(&mut store, "9\nhello\n\n6\n");

        assert_eq!(out.matches("Invalid choice. Please select from 1 to 6.").count(), 3);
        assert_eq!(out.matches("Inventory Stock Manager").count(), 4);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut store = InventoryStore::new();
        let out = run_session(&mut store, "1\nA1\n");

        assert!(out.ends_with("Enter Product Name: \n"));
        assert!(!out.contains(render::EXIT_MESSAGE));
        assert!(store.is_empty());

        let out = run_session(&mut store, "");
        assert!(out.ends_with("Enter your choice (1-6): \n"));
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() {
        let mut store = InventoryStore::new();
        let out = run_session_bytes(&mut store, b"3\n\xff\n6\n");

        assert!(out.contains("Enter SKU to search: Product not found."));
        assert!(out.ends_with("Exiting Inventory Manager.\n"));
    }

    #[test]
    fn test_windows_line_endings() {
        let mut store = InventoryStore::new();
        run_session(&mut store, "1\r\nA1\r\nBolt\r\n3\r\n6\r\n");

        assert_eq!(store.find_by_sku("A1").unwrap().quantity, 3);
        assert_eq!(store.find_by_sku("A1").unwrap().name, "Bolt");
    }
}
