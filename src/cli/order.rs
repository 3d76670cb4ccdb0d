//! Order CLI commands
//!
//! Implements CLI commands for placing and processing orders.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_order, format_order_list};
use crate::error::BistroResult;
use crate::models::{MenuItemId, OrderId};
use crate::services::Restaurant;

/// Order subcommands
#[derive(Subcommand)]
pub enum OrderCommands {
    /// Place a new order
    Add {
        /// Customer name
        customer: String,
        /// Menu item ids (repeat an id to order a dish twice)
        #[arg(required = true, num_args = 1..)]
        items: Vec<u32>,
    },
    /// Complete the next order in the queue
    Process,
    /// List orders
    #[command(alias = "ls")]
    List {
        /// Show completed orders that have not been saved yet
        #[arg(short, long)]
        completed: bool,
    },
    /// Withdraw an active order
    #[command(alias = "rm")]
    Delete {
        /// Order id
        id: i64,
    },
}

/// Handle an order command
pub fn handle_order_command(
    restaurant: &mut Restaurant,
    settings: &Settings,
    cmd: OrderCommands,
) -> BistroResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        OrderCommands::Add { customer, items } => {
            let ids: Vec<MenuItemId> = items.into_iter().map(MenuItemId::from_raw).collect();
            let id = restaurant.place_order(&customer, &ids)?;
            println!("Order {} placed for {}.", id, customer.trim());
        }

        OrderCommands::Process => match restaurant.process_next_order() {
            Some(_) => {
                let order = restaurant.completed.current_order()?;
                println!("Processed order:");
                print!("{}", format_order(order, symbol));
            }
            None => println!("No active orders to process."),
        },

        OrderCommands::List { completed } => {
            if completed {
                println!("{}", format_order_list(restaurant.completed.iter(), symbol));
            } else {
                println!("{}", format_order_list(restaurant.active.iter(), symbol));
            }
        }

        OrderCommands::Delete { id } => {
            let removed = restaurant.delete_order(OrderId::from_raw(id))?;
            println!("Order {} for {} has been deleted.", removed.id, removed.customer_name);
        }
    }

    Ok(())
}
