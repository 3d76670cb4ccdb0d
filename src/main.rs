use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bistro::cli::{
    handle_menu_command, handle_order_command, handle_revenue_command, run_shell, MenuCommands,
    OrderCommands, RevenueCommands,
};
use bistro::config::{BistroPaths, Settings};
use bistro::services::Restaurant;
use bistro::storage::Storage;

#[derive(Parser)]
#[command(
    name = "bistro",
    version,
    about = "Restaurant order management from the terminal",
    long_about = "Bistro keeps the menu, queues customer orders for the kitchen \
                  and books completed orders into a revenue ledger."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive numbered menu
    #[command(alias = "ui")]
    Shell,

    /// Menu catalog commands
    #[command(subcommand)]
    Menu(MenuCommands),

    /// Order commands
    #[command(subcommand)]
    Order(OrderCommands),

    /// Revenue ledger commands
    #[command(subcommand)]
    Revenue(RevenueCommands),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BistroPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Shell) => {
            let mut restaurant = Restaurant::open(&storage, &settings);
            let stdin = io::stdin();
            run_shell(&mut restaurant, &settings, stdin.lock(), io::stdout())?;
        }
        Some(Commands::Menu(cmd)) => {
            let mut restaurant = Restaurant::open(&storage, &settings);
            handle_menu_command(&mut restaurant, &settings, cmd)?;
        }
        Some(Commands::Order(cmd)) => {
            let mut restaurant = Restaurant::open(&storage, &settings);
            handle_order_command(&mut restaurant, &settings, cmd)?;
        }
        Some(Commands::Revenue(cmd)) => {
            let mut restaurant = Restaurant::open(&storage, &settings);
            handle_revenue_command(&mut restaurant, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Bistro at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Menu file:   {}", paths.menu_file().display());
            println!("Ledger file: {}", paths.completed_orders_file().display());
            println!();
            println!("Run 'bistro menu add <name> <description> <price>' to add a dish.");
        }
        Some(Commands::Config) => {
            println!("Bistro Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Menu file:      {}", paths.menu_file().display());
            println!("Ledger file:    {}", paths.completed_orders_file().display());
            println!("Session file:   {}", paths.session_file().display());
            println!();
            println!("Settings:");
            println!("  Menu capacity:        {}", settings.menu_capacity);
            println!("  Max items per order:  {}", settings.max_items_per_order);
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Count first push:     {}", settings.ledger.count_first_push);
        }
        None => {
            println!("Bistro - restaurant order management");
            println!();
            println!("Run 'bistro --help' for usage information.");
            println!("Run 'bistro shell' to launch the interactive menu.");
        }
    }

    Ok(())
}
