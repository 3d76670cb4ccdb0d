//! Menu CLI commands
//!
//! Implements CLI commands for catalog management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_menu_item, format_menu_list};
use crate::error::{BistroError, BistroResult};
use crate::models::{MenuItemId, Money};
use crate::services::Restaurant;

/// Menu subcommands
#[derive(Subcommand)]
pub enum MenuCommands {
    /// Show the menu
    #[command(alias = "ls")]
    List,
    /// Add a dish to the menu
    Add {
        /// Dish name
        name: String,
        /// Short description
        description: String,
        /// Price (e.g., "8.99")
        price: String,
    },
    /// Remove a dish by id
    #[command(alias = "rm")]
    Delete {
        /// Menu item id
        id: u32,
    },
    /// Remove every dish and empty the menu file
    Reset,
}

/// Handle a menu command
pub fn handle_menu_command(
    restaurant: &mut Restaurant,
    settings: &Settings,
    cmd: MenuCommands,
) -> BistroResult<()> {
    match cmd {
        MenuCommands::List => {
            println!(
                "{}",
                format_menu_list(restaurant.catalog.listed(), &settings.currency_symbol)
            );
        }

        MenuCommands::Add {
            name,
            description,
            price,
        } => {
            let price = parse_price(&price)?;
            let item = restaurant.catalog.add_item(&name, &description, price)?;
            println!("Added menu item {}: {}", item.id, item);
            print!("{}", format_menu_item(&item, &settings.currency_symbol));
        }

        MenuCommands::Delete { id } => {
            let removed = restaurant.catalog.delete_item(MenuItemId::from_raw(id))?;
            println!("Menu item with ID {} has been deleted ({}).", id, removed.name);
        }

        MenuCommands::Reset => {
            restaurant.catalog.reset();
            println!("Menu has been reset.");
        }
    }

    Ok(())
}

/// Parse a user-entered price
pub fn parse_price(input: &str) -> BistroResult<Money> {
    let price = Money::parse(input).map_err(|e| {
        BistroError::Validation(format!(
            "Invalid price: '{}'. Use a format like '8.99'. Error: {}",
            input.trim(),
            e
        ))
    })?;

    if price.is_negative() {
        return Err(BistroError::Validation(format!(
            "Price cannot be negative: {}",
            price
        )));
    }

    Ok(price)
}
