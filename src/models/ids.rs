//! Strongly-typed ID wrappers for menu items and orders
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate integer ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $inner:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Wrap a raw value
            pub const fn from_raw(raw: $inner) -> Self {
                Self(raw)
            }

            /// Get the underlying value
            pub const fn value(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(MenuItemId, u32);
define_id!(OrderId, i64);

impl MenuItemId {
    /// Id carried by placeholder slots; never handed out by the allocator
    pub const PLACEHOLDER: MenuItemId = MenuItemId(0);
}

impl OrderId {
    /// Derive an order id from its creation time (milliseconds since the epoch)
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }
}

/// Hands out menu item ids, starting at 1 and never reusing a value
///
/// One allocator belongs to one catalog for the catalog's lifetime. Once
/// `u32::MAX` has been handed out or reserved the allocator is exhausted.
#[derive(Debug, Clone)]
pub struct MenuIdAllocator {
    next: Option<u32>,
}

impl MenuIdAllocator {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Allocate the next id, or `None` when every id is used up
    pub fn allocate(&mut self) -> Option<MenuItemId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(MenuItemId(id))
    }

    /// Record an id that was assigned elsewhere (e.g. read from disk) so it
    /// is never handed out again
    pub fn reserve(&mut self, id: MenuItemId) {
        if let Some(next) = self.next {
            if id.0 >= next {
                self.next = id.0.checked_add(1);
            }
        }
    }

    /// The id the next call to `allocate` will return
    pub fn peek_next(&self) -> Option<MenuItemId> {
        self.next.map(MenuItemId)
    }
}

impl Default for MenuIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
