//! Menu item model
//!
//! A single dish on the catalog: id, name, description and price.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{MenuIdAllocator, MenuItemId};
use super::money::Money;

/// A dish offered by the restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier within the catalog
    pub id: MenuItemId,

    /// Dish name (e.g., "Burger")
    pub name: String,

    /// Short description shown on the menu
    #[serde(default)]
    pub description: String,

    /// Price, never negative
    pub price: Money,
}

impl MenuItem {
    /// Create a menu item, taking its id from the allocator
    pub fn new(
        ids: &mut MenuIdAllocator,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Result<Self, MenuItemValidationError> {
        let id = ids.allocate().ok_or(MenuItemValidationError::IdsExhausted)?;
        Ok(Self::with_id(id, name, description, price))
    }

    /// Create a menu item with a known id (e.g. one read back from disk)
    pub fn with_id(
        id: MenuItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// An empty slot value; placeholders have a zero price
    pub fn placeholder() -> Self {
        Self {
            id: MenuItemId::PLACEHOLDER,
            name: String::new(),
            description: String::new(),
            price: Money::zero(),
        }
    }

    /// Placeholders are hidden from menu listings
    pub fn is_placeholder(&self) -> bool {
        self.price.is_zero()
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), MenuItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(MenuItemValidationError::EmptyName);
        }

        let separator = |c: char| c == ',' || c == '\n' || c == '\r';
        if self.name.contains(separator) || self.description.contains(separator) {
            return Err(MenuItemValidationError::ContainsSeparator);
        }

        if self.price.is_negative() {
            return Err(MenuItemValidationError::NegativePrice(self.price));
        }

        Ok(())
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

/// Validation errors for menu items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemValidationError {
    EmptyName,
    ContainsSeparator,
    NegativePrice(Money),
    IdsExhausted,
}

impl fmt::Display for MenuItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Menu item name cannot be empty"),
            Self::ContainsSeparator => {
                write!(f, "Menu item name and description cannot contain ',' or line breaks")
            }
            Self::NegativePrice(price) => write!(f, "Price cannot be negative: {}", price),
            Self::IdsExhausted => write!(f, "No menu item ids left to assign"),
        }
    }
}

impl std::error::Error for MenuItemValidationError {}
