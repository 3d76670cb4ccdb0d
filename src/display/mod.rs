//! Display formatting for terminal output
//!
//! Provides utilities for formatting menu items and orders for terminal
//! display.

pub mod menu;
pub mod order;

pub use menu::{format_menu_item, format_menu_list};
pub use order::{format_order, format_order_list, format_revenue};
