//! # Stockroom Entry Point
//!
//! Interactive, in-memory inventory manager.
//!
//! ```text
//! $ stockroom
//!
//! Inventory Stock Manager
//! 1. Insert / Update Product
//! 2. Display Inventory
//! 3. Search by SKU
//! 4. Search by Name
//! 5. Delete Product
//! 6. Exit
//! Enter your choice (1-6):
//! ```
//!
//! Configuration comes from `STOCKROOM_MAX_CAPACITY` and `STOCKROOM_LOG`;
//! see [`stockroom_cli::config`].

use stockroom_cli::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging so a bad filter is reported, not ignored
    let config = CliConfig::load()?;

    stockroom_cli::init_tracing(&config.log_filter);

    stockroom_cli::run(&config)?;
    Ok(())
}
