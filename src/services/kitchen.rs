//! Active order queue
//!
//! Orders wait here in arrival order until the kitchen processes them onto
//! the completed orders stack.

use crate::containers::LinkedQueue;
use crate::error::{BistroError, BistroResult};
use crate::models::{Order, OrderId};

use super::ledger::CompletedOrders;

/// FIFO queue of orders that have not been processed yet
#[derive(Default)]
pub struct ActiveOrders {
    queue: LinkedQueue<Order>,
}

impl ActiveOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an order placed by a customer
    pub fn place(&mut self, order: Order) -> BistroResult<()> {
        if order.is_completed() {
            return Err(BistroError::Validation(format!(
                "Order {} is already completed",
                order.id
            )));
        }
        self.queue.enqueue(order);
        Ok(())
    }

    /// Move the front order onto the completed stack
    ///
    /// The order is marked completed and its amount booked by the ledger.
    /// With nothing queued this logs and returns `None`.
    pub fn process_next_order(&mut self, completed: &mut CompletedOrders) -> Option<OrderId> {
        let mut order = match self.queue.dequeue() {
            Ok(order) => order,
            Err(e) => {
                tracing::info!(error = %e, "no active orders to process");
                return None;
            }
        };

        if let Err(e) = order.mark_completed() {
            tracing::warn!(error = %e, "processing an order that was already completed");
        }

        let id = order.id;
        tracing::info!(order = %id, customer = %order.customer_name, "order completed");
        completed.push(order);
        Some(id)
    }

    /// Withdraw a queued order by id
    pub fn delete_order(&mut self, id: OrderId) -> BistroResult<Order> {
        self.queue
            .remove_first(|order| order.id == id)
            .ok_or_else(|| BistroError::order_not_found(id.to_string()))
    }

    /// The next order the kitchen will process
    pub fn peek(&self) -> BistroResult<&Order> {
        self.queue.peek()
    }

    pub fn size(&self) -> usize {
        self.queue.size()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Iterate in processing order
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.queue.iter()
    }
}

impl FromIterator<Order> for ActiveOrders {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPolicy;
    use crate::models::{MenuItem, MenuItemId, Money};
    use crate::storage::TextFile;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn order(customer: &str, cents: i64, offset_secs: i64) -> Order {
        let item = MenuItem::with_id(MenuItemId::from_raw(1), "Dish", "", Money::from_cents(cents));
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::seconds(offset_secs);
        Order::placed_at(customer, vec![item], 10, at).unwrap()
    }

    fn completed(temp_dir: &TempDir) -> CompletedOrders {
        CompletedOrders::new(
            TextFile::new(temp_dir.path().join("completed_orders.txt")),
            LedgerPolicy::default(),
        )
    }

    #[test]
    fn test_process_next_order_moves_and_books() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = completed(&temp_dir);
        // One prior entry so the next push is booked
        ledger.push(order("Earlier", 500, 0));
        let before = ledger.total_revenue();

        let mut active = ActiveOrders::new();
        let placed = order("Ada", 1250, 1);
        let placed_id = placed.id;
        active.place(placed).unwrap();

        assert_eq!(active.process_next_order(&mut ledger), Some(placed_id));
        assert!(active.is_empty());

        let top = ledger.current_order().unwrap();
        assert_eq!(top.id, placed_id);
        assert!(top.is_completed());
        assert_eq!(ledger.total_revenue(), before + Money::from_cents(1250));
    }

    #[test]
    fn test_process_empty_queue_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = completed(&temp_dir);
        let mut active = ActiveOrders::new();

        assert_eq!(active.process_next_order(&mut ledger), None);
        assert!(active.is_empty());
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_revenue(), Money::zero());
    }

    #[test]
    fn test_orders_processed_in_arrival_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = completed(&temp_dir);
        let mut active: ActiveOrders = vec![
            order("Ada", 100, 0),
            order("Grace", 200, 1),
            order("Linus", 300, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(active.peek().unwrap().customer_name, "Ada");
        while active.process_next_order(&mut ledger).is_some() {}

        let on_stack: Vec<_> = ledger.iter().map(|o| o.customer_name.as_str()).collect();
        assert_eq!(on_stack, vec!["Linus", "Grace", "Ada"]);
    }

    #[test]
    fn test_place_rejects_completed_order() {
        let mut active = ActiveOrders::new();
        let mut done = order("Ada", 100, 0);
        done.mark_completed().unwrap();

        assert!(matches!(active.place(done), Err(BistroError::Validation(_))));
        assert!(active.is_empty());
    }

    #[test]
    fn test_delete_order() {
        let mut active = ActiveOrders::new();
        let first = order("Ada", 100, 0);
        let second = order("Grace", 200, 1);
        let second_id = second.id;
        active.place(first).unwrap();
        active.place(second).unwrap();

        assert_eq!(active.delete_order(second_id).unwrap().customer_name, "Grace");
        assert_eq!(active.size(), 1);
        assert!(active.delete_order(second_id).unwrap_err().is_not_found());
    }
}
