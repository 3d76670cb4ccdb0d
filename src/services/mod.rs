//! Business logic layer for Bistro
//!
//! This module contains the restaurant's working state:
//! - `Catalog`: menu items on a growable array
//! - `ActiveOrders`: the FIFO queue of orders awaiting the kitchen
//! - `CompletedOrders`: the LIFO stack of finished orders and the revenue ledger
//! - `Restaurant`: the session tying them together

pub mod catalog;
pub mod kitchen;
pub mod ledger;
pub mod restaurant;

pub use catalog::Catalog;
pub use kitchen::ActiveOrders;
pub use ledger::CompletedOrders;
pub use restaurant::Restaurant;
