//! Restaurant session
//!
//! Ties the catalog, the active queue and the completed stack together and
//! snapshots the order state to `session.json` so separate invocations see
//! the same queue.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{BistroError, BistroResult};
use crate::models::{MenuItemId, Money, Order, OrderId};
use crate::storage::{read_json, write_json_atomic, Storage};

use super::catalog::Catalog;
use super::kitchen::ActiveOrders;
use super::ledger::CompletedOrders;

/// Serializable session state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    /// Active orders, front of the queue first
    #[serde(default)]
    active_orders: Vec<Order>,
    /// Completed orders not yet written to the ledger, top of the stack first
    #[serde(default)]
    completed_orders: Vec<Order>,
    /// Running revenue at the time of the snapshot
    #[serde(default)]
    revenue: Option<Money>,
}

/// Everything one run of the program works with
pub struct Restaurant {
    pub catalog: Catalog,
    pub active: ActiveOrders,
    pub completed: CompletedOrders,
    session_file: PathBuf,
    max_items_per_order: usize,
}

impl Restaurant {
    /// Build the session and load menu, revenue and any saved order state
    pub fn open(storage: &Storage, settings: &Settings) -> Self {
        let mut restaurant = Self {
            catalog: Catalog::new(storage.menu_file(), settings.menu_capacity),
            active: ActiveOrders::new(),
            completed: CompletedOrders::new(storage.ledger_file(), settings.ledger),
            session_file: storage.session_file(),
            max_items_per_order: settings.max_items_per_order,
        };

        restaurant.catalog.load();
        restaurant.completed.load_total_revenue();
        restaurant.restore_session();
        restaurant
    }

    /// Place an order for the given dish ids
    pub fn place_order(&mut self, customer: &str, item_ids: &[MenuItemId]) -> BistroResult<OrderId> {
        let items = self.catalog.pick(item_ids)?;
        let mut order = Order::new(customer.trim(), items, self.max_items_per_order)
            .map_err(|e| BistroError::Validation(e.to_string()))?;

        // Orders placed within the same millisecond would share a timestamp id
        while self.order_id_taken(order.id) {
            order.id = OrderId::from_raw(order.id.value() + 1);
        }
        let id = order.id;

        self.active.place(order)?;
        self.checkpoint();
        Ok(id)
    }

    /// Complete the next active order
    pub fn process_next_order(&mut self) -> Option<OrderId> {
        let processed = self.active.process_next_order(&mut self.completed);
        if processed.is_some() {
            self.checkpoint();
        }
        processed
    }

    /// Withdraw an active order
    pub fn delete_order(&mut self, id: OrderId) -> BistroResult<Order> {
        let order = self.active.delete_order(id)?;
        self.checkpoint();
        Ok(order)
    }

    /// Recompute revenue from the ledger file and the unsaved orders
    pub fn calculate_total_revenue(&mut self) -> Money {
        let total = self.completed.calculate_total_revenue();
        self.checkpoint();
        total
    }

    /// Flush completed orders to the ledger file
    pub fn save_completed_orders(&mut self) -> BistroResult<usize> {
        let saved = self.completed.save_completed_orders();
        // Whatever made it to the file is gone from the stack either way
        self.checkpoint();
        saved
    }

    /// Write the order state snapshot
    pub fn save_session(&self) -> BistroResult<()> {
        let data = SessionData {
            active_orders: self.active.iter().cloned().collect(),
            completed_orders: self.completed.iter().cloned().collect(),
            revenue: Some(self.completed.total_revenue()),
        };
        write_json_atomic(&self.session_file, &data)
    }

    fn order_id_taken(&self, id: OrderId) -> bool {
        self.active.iter().any(|order| order.id == id)
            || self.completed.iter().any(|order| order.id == id)
    }

    fn checkpoint(&self) {
        if let Err(e) = self.save_session() {
            tracing::warn!(error = %e, "failed to save session");
        }
    }

    fn restore_session(&mut self) {
        let data: SessionData = match read_json(&self.session_file) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable session snapshot");
                return;
            }
        };

        self.active = data
            .active_orders
            .into_iter()
            .filter(|order| !order.is_completed())
            .collect();

        let total = data
            .revenue
            .unwrap_or_else(|| self.completed.total_revenue());
        self.completed.restore(data.completed_orders, total);
    }
}
