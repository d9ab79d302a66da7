//! # stockroom-cli
//!
//! Terminal front-end for the Stockroom inventory manager.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── CliError for menu transitions
//! ├── menu.rs         ◄─── The six menu choices
//! ├── render.rs       ◄─── Text for results and errors
//! └── session.rs      ◄─── The command loop
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (stderr)
//! 3. Create the store, bounded by the configured maximum
//! 4. Run the session on stdin/stdout until Exit or end of input

pub mod config;
pub mod error;
pub mod menu;
pub mod render;
pub mod session;

use std::io;

use stockroom_core::InventoryStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{CliConfig, ConfigError};
pub use error::{CliError, CliResult};
pub use session::Session;

/// Runs one interactive session on the process's stdin and stdout.
///
/// The store lives exactly as long as this call.
pub fn run(config: &CliConfig) -> CliResult<()> {
    let mut store = InventoryStore::with_capacity_limit(config.max_records);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut store, stdin.lock(), stdout.lock()).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `STOCKROOM_LOG=debug` - Show every lookup and rejection
/// - `STOCKROOM_LOG=stockroom_core=info` - Store mutations only
/// - Default: WARN, which keeps the terminal quiet
///
/// Output goes to stderr so it never interleaves with the menu.
///
/// `filter` is the directive from [`CliConfig::log_filter`], which
/// [`CliConfig::from_lookup`] has already parsed.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    info!("Tracing initialized");
}
