//! # Menu Choices
//!
//! The six transitions of the command loop and their menu keys.

use std::str::FromStr;

use crate::error::CliError;

/// One operator choice from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    InsertOrTopUp,
    Display,
    SearchBySku,
    SearchByName,
    Delete,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::InsertOrTopUp,
        MenuChoice::Display,
        MenuChoice::SearchBySku,
        MenuChoice::SearchByName,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// The text the operator types to pick this choice.
    pub const fn key(self) -> &'static str {
        match self {
            MenuChoice::InsertOrTopUp => "1",
            MenuChoice::Display => "2",
            MenuChoice::SearchBySku => "3",
            MenuChoice::SearchByName => "4",
            MenuChoice::Delete => "5",
            MenuChoice::Exit => "6",
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::InsertOrTopUp => "Insert / Update Product",
            MenuChoice::Display => "Display Inventory",
            MenuChoice::SearchBySku => "Search by SKU",
            MenuChoice::SearchByName => "Search by Name",
            MenuChoice::Delete => "Delete Product",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = CliError;

    /// Surrounding whitespace is ignored; anything else must match a key exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or_else(|| CliError::InvalidChoice(key.to_string()))
    }
}
