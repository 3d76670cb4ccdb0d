//! Order model
//!
//! A customer's order: the dishes it contains, its total and whether the
//! kitchen has finished it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::OrderId;
use super::menu_item::MenuItem;
use super::money::Money;

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier derived from the creation timestamp
    pub id: OrderId,

    /// Name the order was placed under
    pub customer_name: String,

    /// Ordered dishes in insertion order (duplicates allowed)
    pub items: Vec<MenuItem>,

    /// Sum of item prices at the time the items were set
    pub total_amount: Money,

    /// Set once the kitchen processes the order
    #[serde(default)]
    pub completed: bool,

    /// When the order was placed
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Place a new order
    ///
    /// `max_items` bounds how many dishes one order may hold.
    pub fn new(
        customer_name: impl Into<String>,
        items: Vec<MenuItem>,
        max_items: usize,
    ) -> Result<Self, OrderValidationError> {
        Self::placed_at(customer_name, items, max_items, Utc::now())
    }

    /// Place a new order with an explicit creation time
    pub fn placed_at(
        customer_name: impl Into<String>,
        items: Vec<MenuItem>,
        max_items: usize,
        created_at: DateTime<Utc>,
    ) -> Result<Self, OrderValidationError> {
        let customer_name = customer_name.into();
        if customer_name.trim().is_empty() {
            return Err(OrderValidationError::EmptyCustomerName);
        }
        if items.is_empty() {
            return Err(OrderValidationError::NoItems);
        }
        if items.len() > max_items {
            return Err(OrderValidationError::TooManyItems {
                count: items.len(),
                max: max_items,
            });
        }

        let total_amount = items.iter().map(|item| item.price).sum();

        Ok(Self {
            id: OrderId::from_timestamp(created_at),
            customer_name,
            items,
            total_amount,
            completed: false,
            created_at,
        })
    }

    /// Replace the item list and recompute the total
    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        self.total_amount = items.iter().map(|item| item.price).sum();
        self.items = items;
    }

    /// Drop one item from the order; the total is left as it was
    pub fn remove_item(&mut self, pos: usize) -> Option<MenuItem> {
        if pos < self.items.len() {
            Some(self.items.remove(pos))
        } else {
            None
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flip the order to completed; an order completes exactly once
    pub fn mark_completed(&mut self) -> Result<(), OrderValidationError> {
        if self.completed {
            return Err(OrderValidationError::AlreadyCompleted(self.id));
        }
        self.completed = true;
        Ok(())
    }

    /// Multi-line summary written to the completed orders ledger
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Order ID: {}, Customer Name: {}\nItems:\n",
            self.id, self.customer_name
        );
        for item in &self.items {
            out.push_str(&format!("-{} ({})\n", item.name, item.price));
        }
        out.push_str(&format!("Total Amount: {}\n", self.total_amount));
        out.push_str(&format!("Status: {}", self.status_label()));
        out
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Active"
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({} items, {})",
            self.id,
            self.customer_name,
            self.items.len(),
            self.total_amount
        )
    }
}

/// Validation errors for orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    EmptyCustomerName,
    NoItems,
    TooManyItems { count: usize, max: usize },
    AlreadyCompleted(OrderId),
}

impl fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCustomerName => write!(f, "Customer name cannot be empty"),
            Self::NoItems => write!(f, "An order needs at least one item"),
            Self::TooManyItems { count, max } => {
                write!(f, "Order has {} items, the limit is {}", count, max)
            }
            Self::AlreadyCompleted(id) => write!(f, "Order {} is already completed", id),
        }
    }
}

impl std::error::Error for OrderValidationError {}
