//! Interactive shell
//!
//! The numbered menu loop. Every failed action is reported and the loop
//! returns to the prompt; only "Exit" or end of input leaves it.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_menu_list, format_order_list, format_revenue};
use crate::error::{BistroError, BistroResult};
use crate::models::{MenuItemId, OrderId};
use crate::services::Restaurant;

use super::menu::parse_price;

const MENU: &str = "\
--- Restaurant Order Management System ---
1. Display Menu
2. Add Menu Item
3. Delete Menu Item
4. Reset Menu
5. Add New Order
6. Process Next Order
7. Display Orders
8. Delete Order
9. Calculate Total Amount of Sold Orders
10. Save Completed Orders to File
11. Exit";

/// Run the interactive loop until the user exits or input ends
pub fn run_shell<R, W>(
    restaurant: &mut Restaurant,
    settings: &Settings,
    input: R,
    output: W,
) -> BistroResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut shell = Shell {
        restaurant,
        settings,
        input,
        output,
    };
    shell.run()
}

struct Shell<'a, R, W> {
    restaurant: &'a mut Restaurant,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    fn run(&mut self) -> BistroResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let result = match choice.trim() {
                "1" => self.display_menu(),
                "2" => self.add_menu_item(),
                "3" => self.delete_menu_item(),
                "4" => self.reset_menu(),
                "5" => self.add_order(),
                "6" => self.process_next_order(),
                "7" => self.display_orders(),
                "8" => self.delete_order(),
                "9" => self.calculate_revenue(),
                "10" => self.save_completed_orders(),
                "11" => {
                    writeln!(self.output, "Exiting program...")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(BistroError::Io(e)) if self.input_closed() => {
                    tracing::debug!(error = %e, "input closed mid-action");
                    return Ok(());
                }
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    /// Print `message` and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> BistroResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like `prompt`, but end of input is an error
    fn ask(&mut self, message: &str) -> BistroResult<String> {
        self.prompt(message)?
            .ok_or_else(|| BistroError::Io("input closed".into()))
    }

    fn input_closed(&mut self) -> bool {
        matches!(self.input.fill_buf(), Ok(buf) if buf.is_empty())
    }

    fn display_menu(&mut self) -> BistroResult<()> {
        let listing = format_menu_list(
            self.restaurant.catalog.listed(),
            &self.settings.currency_symbol,
        );
        writeln!(self.output, "{}", listing)?;
        Ok(())
    }

    fn add_menu_item(&mut self) -> BistroResult<()> {
        let name = self.ask("Enter the name of the menu item: ")?;
        let description = self.ask("Enter the description of the menu item: ")?;
        let price = parse_price(&self.ask("Enter the price of the menu item: ")?)?;

        let item = self.restaurant.catalog.add_item(&name, &description, price)?;
        writeln!(self.output, "Menu item {} added successfully!", item.id)?;
        Ok(())
    }

    fn delete_menu_item(&mut self) -> BistroResult<()> {
        self.display_menu()?;
        let id = parse_id::<MenuItemId>(&self.ask("Enter the ID of the menu item to delete: ")?)?;

        self.restaurant.catalog.delete_item(id)?;
        writeln!(self.output, "Menu item with ID {} has been deleted.", id)?;
        Ok(())
    }

    fn reset_menu(&mut self) -> BistroResult<()> {
        self.restaurant.catalog.reset();
        writeln!(self.output, "Menu has been reset successfully!")?;
        Ok(())
    }

    fn add_order(&mut self) -> BistroResult<()> {
        let customer = self.ask("Enter the customer name: ")?;
        self.display_menu()?;
        let answer = self.ask("Enter the menu item IDs (separated by spaces or commas): ")?;

        let ids = answer
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(parse_id::<MenuItemId>)
            .collect::<BistroResult<Vec<_>>>()?;

        let id = self.restaurant.place_order(&customer, &ids)?;
        writeln!(self.output, "Order {} created successfully!", id)?;
        Ok(())
    }

    fn process_next_order(&mut self) -> BistroResult<()> {
        match self.restaurant.process_next_order() {
            Some(id) => writeln!(self.output, "Order {} is set as completed!", id)?,
            None => writeln!(self.output, "No active orders to process.")?,
        }
        Ok(())
    }

    fn display_orders(&mut self) -> BistroResult<()> {
        let symbol = self.settings.currency_symbol.as_str();
        let active = format_order_list(self.restaurant.active.iter(), symbol);
        let completed = format_order_list(self.restaurant.completed.iter(), symbol);

        writeln!(self.output, "Active orders:\n{}", active)?;
        writeln!(self.output, "Completed orders (unsaved):\n{}", completed)?;
        Ok(())
    }

    fn delete_order(&mut self) -> BistroResult<()> {
        let id = parse_id::<OrderId>(&self.ask("Enter the ID of the order to delete: ")?)?;

        let removed = self.restaurant.delete_order(id)?;
        writeln!(
            self.output,
            "Order {} for {} has been deleted.",
            removed.id, removed.customer_name
        )?;
        Ok(())
    }

    fn calculate_revenue(&mut self) -> BistroResult<()> {
        let total = self.restaurant.calculate_total_revenue();
        writeln!(
            self.output,
            "{}",
            format_revenue(total, &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn save_completed_orders(&mut self) -> BistroResult<()> {
        let saved = self.restaurant.save_completed_orders()?;
        writeln!(self.output, "Saved {} completed order(s) to file.", saved)?;
        Ok(())
    }
}

fn parse_id<T: std::str::FromStr>(input: &str) -> BistroResult<T> {
    input
        .trim()
        .parse()
        .map_err(|_| BistroError::Validation(format!("Invalid ID: '{}'", input.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BistroPaths;
    use crate::models::Money;
    use crate::storage::Storage;
    use std::fs;
    use tempfile::TempDir;

    fn run(temp_dir: &TempDir, script: &str) -> (Restaurant, String) {
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        if !data_dir.join("menu.txt").exists() {
            fs::write(
                data_dir.join("menu.txt"),
                "1,Burger,Classic beef burger,8.99\n2,Fries,Crispy fries,3.50\n",
            )
            .unwrap();
        }

        let paths = BistroPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::default();
        let mut restaurant = Restaurant::open(&storage, &settings);

        let mut output = Vec::new();
        run_shell(&mut restaurant, &settings, script.as_bytes(), &mut output).unwrap();
        (restaurant, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_display_menu_and_exit() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run(&temp_dir, "1\n11\n");

        assert!(output.contains("1. Display Menu"));
        assert!(output.contains("Burger"));
        assert!(output.contains("$3.50"));
        assert!(output.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_zero_priced_items_stay_off_the_menu() {
        let temp_dir = TempDir::new().unwrap();
        let (restaurant, output) = run(&temp_dir, "2\nWater\nTap water\n0\n1\n11\n");

        assert_eq!(restaurant.catalog.size(), 3);
        assert!(output.contains("Burger"));
        assert!(!output.contains("Tap water"));
    }

    #[test]
    fn test_order_flow() {
        let temp_dir = TempDir::new().unwrap();
        let script = "5\nAda\n1 2\n5\nGrace\n2,2\n6\n6\n7\n11\n";
        let (restaurant, output) = run(&temp_dir, script);

        assert!(restaurant.active.is_empty());
        assert_eq!(restaurant.completed.size(), 2);
        assert_eq!(restaurant.completed.current_order().unwrap().customer_name, "Grace");
        // Ada's order went onto an empty stack and was not booked
        assert_eq!(restaurant.completed.total_revenue(), Money::from_cents(700));
        assert!(output.contains("is set as completed!"));
        assert!(output.contains("Completed orders (unsaved):"));
    }

    #[test]
    fn test_errors_return_to_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let script = "42\n3\n99\n6\n2\nSoup\nHot\nfree\n11\n";
        let (restaurant, output) = run(&temp_dir, script);

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Error: Menu item not found: 99"));
        assert!(output.contains("No active orders to process."));
        assert!(output.contains("Error: Validation error: Invalid price"));
        assert_eq!(restaurant.catalog.size(), 2);
        assert!(output.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_add_and_delete_menu_item() {
        let temp_dir = TempDir::new().unwrap();
        let script = "2\nSoup\nTomato soup\n4.50\n3\n1\n11\n";
        let (restaurant, _) = run(&temp_dir, script);

        let names: Vec<_> = restaurant.catalog.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Fries", "Soup"]);
        assert_eq!(restaurant.catalog.get(1).unwrap().id.value(), 3);
    }

    #[test]
    fn test_end_of_input_mid_action_exits_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let (restaurant, _) = run(&temp_dir, "2\nSoup\n");
        assert_eq!(restaurant.catalog.size(), 2);
    }

    #[test]
    fn test_save_completed_orders() {
        let temp_dir = TempDir::new().unwrap();
        let script = "5\nAda\n1\n6\n10\n11\n";
        let (restaurant, output) = run(&temp_dir, script);

        assert!(restaurant.completed.is_empty());
        assert!(output.contains("Saved 1 completed order(s) to file."));
        let ledger = fs::read_to_string(temp_dir.path().join("data").join("completed_orders.txt")).unwrap();
        assert!(ledger.starts_with("Total Revenue = 0.00\n"));
        assert!(ledger.contains("Customer Name: Ada"));
    }
}
