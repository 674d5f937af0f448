//! Main menu choices.

use std::str::FromStr;

use crate::common::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Delete,
    Update,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Update,
        MenuChoice::DisplayAll,
        MenuChoice::Exit,
    ];

    /// The number typed to select this entry.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Search => 2,
            MenuChoice::Delete => 3,
            MenuChoice::Update => 4,
            MenuChoice::DisplayAll => 5,
            MenuChoice::Exit => 6,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add New Supplier/Vendor",
            MenuChoice::Search => "Search Supplier/Vendor by ID",
            MenuChoice::Delete => "Delete Supplier/Vendor by ID",
            MenuChoice::Update => "Update Supplier/Vendor Information",
            MenuChoice::DisplayAll => "Display All Suppliers/Vendors",
            MenuChoice::Exit => "Exit System",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| trimmed == choice.number().to_string())
            .ok_or_else(|| Error::MalformedInput(trimmed.to_string()))
    }
}
