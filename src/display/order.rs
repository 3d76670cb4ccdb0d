//! Order display formatting
//!
//! Formats active and completed orders and the revenue figure.

use crate::models::{Money, Order};

/// Format a list of orders as a table
pub fn format_order_list<'a, I>(orders: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Order>,
{
    let orders: Vec<&Order> = orders.into_iter().collect();
    if orders.is_empty() {
        return "No orders found.".to_string();
    }

    let customer_width = orders
        .iter()
        .map(|o| o.customer_name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<15}  {:<customer_width$}  {:>5}  {:>10}  {}\n",
        "Order ID",
        "Customer",
        "Items",
        "Total",
        "Status",
        customer_width = customer_width,
    ));

    output.push_str(&format!(
        "{:-<15}  {:-<customer_width$}  {:->5}  {:->10}  {:-<9}\n",
        "",
        "",
        "",
        "",
        "",
        customer_width = customer_width,
    ));

    for order in &orders {
        output.push_str(&format!(
            "{:<15}  {:<customer_width$}  {:>5}  {:>10}  {}\n",
            order.id.to_string(),
            order.customer_name,
            order.items.len(),
            order.total_amount.format_with_symbol(currency_symbol),
            order.status_label(),
            customer_width = customer_width,
        ));
    }

    let total: Money = orders.iter().map(|o| o.total_amount).sum();
    output.push_str(&format!(
        "{:<15}  {:<customer_width$}  {:>5}  {:>10}\n",
        "TOTAL",
        "",
        "",
        total.format_with_symbol(currency_symbol),
        customer_width = customer_width,
    ));

    output
}

/// Format a single order with its items
pub fn format_order(order: &Order, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Order: {}\n", order.id));
    output.push_str(&format!("  Customer: {}\n", order.customer_name));
    output.push_str(&format!(
        "  Placed:   {}\n",
        order.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str("  Items:\n");
    for item in &order.items {
        output.push_str(&format!(
            "    - {} ({})\n",
            item.name,
            item.price.format_with_symbol(currency_symbol)
        ));
    }
    output.push_str(&format!(
        "  Total:    {}\n",
        order.total_amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Status:   {}\n", order.status_label()));

    output
}

/// Format the revenue figure
pub fn format_revenue(total: Money, currency_symbol: &str) -> String {
    format!("Total Revenue: {}", total.format_with_symbol(currency_symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuItem, MenuItemId};

    fn order(customer: &str, cents: &[i64]) -> Order {
        let items = cents
            .iter()
            .enumerate()
            .map(|(i, c)| {
                MenuItem::with_id(MenuItemId::from_raw(i as u32 + 1), format!("Dish {}", i + 1), "", Money::from_cents(*c))
            })
            .collect();
        Order::new(customer, items, 10).unwrap()
    }

    #[test]
    fn test_format_order_list() {
        let orders = vec![order("Ada", &[899, 350]), order("Grace", &[450])];
        let output = format_order_list(&orders, "$");

        assert!(output.contains("Ada"));
        assert!(output.contains("$12.49"));
        assert!(output.contains("Active"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$16.99"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_order_list(&Vec::<Order>::new(), "$").contains("No orders found"));
    }

    #[test]
    fn test_format_order() {
        let mut order = order("Ada", &[899]);
        order.mark_completed().unwrap();
        let output = format_order(&order, "$");

        assert!(output.contains("Customer: Ada"));
        assert!(output.contains("- Dish 1 ($8.99)"));
        assert!(output.contains("Status:   Completed"));
    }

    #[test]
    fn test_format_revenue() {
        assert_eq!(format_revenue(Money::from_cents(1250), "$"), "Total Revenue: $12.50");
    }
}
