//! Completed orders and the revenue ledger
//!
//! Completed orders sit on a linked stack until they are written out to
//! `completed_orders.txt`. The running revenue total lives alongside them.

use crate::config::LedgerPolicy;
use crate::containers::LinkedStack;
use crate::error::BistroResult;
use crate::models::{Money, Order};
use crate::storage::{format_revenue_line, parse_revenue_line, TextFile};

/// Stack of completed orders plus the running revenue total
pub struct CompletedOrders {
    stack: LinkedStack<Order>,
    total: Money,
    policy: LedgerPolicy,
    file: TextFile,
}

impl CompletedOrders {
    pub fn new(file: TextFile, policy: LedgerPolicy) -> Self {
        Self {
            stack: LinkedStack::new(),
            total: Money::zero(),
            policy,
            file,
        }
    }

    /// Put a completed order on top of the stack and book its revenue
    ///
    /// Unless `count_first_push` is set, the push onto an empty stack is not
    /// added to the total.
    pub fn push(&mut self, order: Order) {
        let amount = order.total_amount;
        let first = self.stack.is_empty();
        self.stack.push(order);

        if first && !self.policy.count_first_push {
            tracing::debug!(%amount, "first completed order not booked to revenue");
        } else {
            self.total += amount;
        }
    }

    /// Remove the most recently completed order; revenue is not reduced
    pub fn pop(&mut self) -> BistroResult<Order> {
        self.stack.pop()
    }

    /// The most recently completed order
    pub fn current_order(&self) -> BistroResult<&Order> {
        self.stack.peek()
    }

    pub fn total_revenue(&self) -> Money {
        self.total
    }

    pub fn size(&self) -> usize {
        self.stack.size()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterate from the most recent order down
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.stack.iter()
    }

    /// Put back a previously saved session without touching revenue
    ///
    /// `orders` runs from the top of the stack to the bottom.
    pub fn restore(&mut self, orders: Vec<Order>, total: Money) {
        self.stack.clear();
        for order in orders.into_iter().rev() {
            self.stack.push(order);
        }
        self.total = total;
    }

    /// Revenue recorded in the ledger file header
    pub fn stored_revenue(&self) -> BistroResult<Money> {
        let lines = self.file.read()?;
        parse_revenue_line(&lines[0])
    }

    /// Replace the running total with the one stored in the ledger file
    ///
    /// On a missing, empty or malformed file the total is left alone.
    pub fn load_total_revenue(&mut self) -> bool {
        match self.stored_revenue() {
            Ok(total) => {
                self.total = total;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "no revenue data to load");
                false
            }
        }
    }

    /// Recompute the total as stored revenue plus every order on the stack
    ///
    /// Works on a copy, so the live stack keeps its orders. An unreadable
    /// ledger file counts as zero stored revenue.
    pub fn calculate_total_revenue(&mut self) -> Money {
        let mut total = self.stored_revenue().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ledger unreadable, starting from zero");
            Money::zero()
        });

        let mut working = self.stack.clone();
        while let Ok(order) = working.pop() {
            total += order.total_amount;
        }

        self.total = total;
        total
    }

    /// Write the running total into the ledger header and move every order
    /// on the stack to the end of the file
    ///
    /// Lines after the header are kept. Returns the number of orders written.
    pub fn save_completed_orders(&mut self) -> BistroResult<usize> {
        let mut lines = self.file.read().unwrap_or_else(|e| {
            tracing::info!(error = %e, "starting a new ledger file");
            Vec::new()
        });

        let header = format_revenue_line(self.total);
        match lines.first_mut() {
            Some(first) => *first = header,
            None => lines.push(header),
        }
        self.file.write(&lines.join("\n"))?;

        let mut saved = 0;
        while !self.stack.is_empty() {
            let order = self.stack.peek()?;
            self.file.append(&order.summary())?;
            self.stack.pop()?;
            saved += 1;
        }

        tracing::info!(saved, total = %self.total, "completed orders saved");
        Ok(saved)
    }
}
