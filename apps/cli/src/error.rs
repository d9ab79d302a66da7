//! # CLI Error Type
//!
//! Unified error type for menu transitions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Transition (e.g. insert_or_top_up)                                     │
//! │  CliResult<Flow>                                                        │
//! │         │                                                               │
//! │         ├── InventoryError ──► CliError::Inventory ──┐                  │
//! │         ├── unknown menu text ► CliError::InvalidChoice┤                │
//! │         │                                             ▼                 │
//! │         │                             render::error_line ──► stdout     │
//! │         │                             (loop re-prompts)                 │
//! │         │                                                               │
//! │         ├── end of input ──────► CliError::InputClosed ──► loop exits   │
//! │         └── stdin/stdout fails ► CliError::Io ──────────► main          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::InventoryError;
use thiserror::Error;

/// Errors surfaced by the command loop.
#[derive(Debug, Error)]
pub enum CliError {
    /// Store or validation rejection.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Menu text outside `1`..`6`.
    #[error("Invalid choice: '{0}'")]
    InvalidChoice(String),

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the loop should report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CliError::Inventory(_) | CliError::InvalidChoice(_))
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_errors_pass_through() {
        let err: CliError = InventoryError::EmptyName.into();
        assert_eq!(err.to_string(), "Product name cannot be empty");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_recoverability() {
        assert!(CliError::InvalidChoice("9".to_string()).is_recoverable());
        assert!(!CliError::InputClosed.is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(!CliError::from(io).is_recoverable());
    }
}
