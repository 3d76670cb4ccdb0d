//! Revenue CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_revenue;
use crate::error::BistroResult;
use crate::services::Restaurant;

/// Revenue subcommands
#[derive(Subcommand)]
pub enum RevenueCommands {
    /// Show the running revenue total
    Show,
    /// Recompute revenue from the ledger file and unsaved completed orders
    Calculate,
    /// Write completed orders and the revenue total to the ledger file
    Save,
}

/// Handle a revenue command
pub fn handle_revenue_command(
    restaurant: &mut Restaurant,
    settings: &Settings,
    cmd: RevenueCommands,
) -> BistroResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RevenueCommands::Show => {
            println!("{}", format_revenue(restaurant.completed.total_revenue(), symbol));
        }
        RevenueCommands::Calculate => {
            let total = restaurant.calculate_total_revenue();
            println!("{}", format_revenue(total, symbol));
        }
        RevenueCommands::Save => {
            let saved = restaurant.save_completed_orders()?;
            println!("Saved {} completed order(s).", saved);
            println!("{}", format_revenue(restaurant.completed.total_revenue(), symbol));
        }
    }

    Ok(())
}
