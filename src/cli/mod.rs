//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod menu;
pub mod order;
pub mod revenue;
pub mod shell;

pub use menu::{handle_menu_command, MenuCommands};
pub use order::{handle_order_command, OrderCommands};
pub use revenue::{handle_revenue_command, RevenueCommands};
pub use shell::run_shell;
