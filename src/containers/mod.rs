//! Hand-built containers
//!
//! - [`GrowableArray`]: contiguous, doubling store used by the menu catalog
//! - [`LinkedQueue`]: FIFO of active orders
//! - [`LinkedStack`]: LIFO of completed orders
//!
//! The linked containers keep their nodes in a slot arena and link them by
//! handle.

mod arena;
pub mod growable_array;
pub mod linked_queue;
pub mod linked_stack;

pub use growable_array::{GrowableArray, DEFAULT_CAPACITY};
pub use linked_queue::LinkedQueue;
pub use linked_stack::LinkedStack;
