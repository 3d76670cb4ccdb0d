//! Core data models for Bistro
//!
//! This module contains the entities of the restaurant domain: menu items,
//! orders, their ids and the money type used for prices and revenue.

pub mod ids;
pub mod menu_item;
pub mod money;
pub mod order;

pub use ids::{MenuIdAllocator, MenuItemId, OrderId};
pub use menu_item::{MenuItem, MenuItemValidationError};
pub use money::Money;
pub use order::{Order, OrderValidationError};
