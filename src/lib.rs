//! Bistro - restaurant order management from the terminal
//!
//! This library keeps a menu catalog, a queue of orders waiting for the
//! kitchen, and a stack of completed orders whose amounts feed a revenue
//! ledger on disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Menu items, orders, ids and money
//! - `containers`: Growable array, linked queue and linked stack
//! - `storage`: Text file and JSON persistence
//! - `services`: Catalog, kitchen queue and revenue ledger
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use bistro::config::{BistroPaths, Settings};
//! use bistro::services::Restaurant;
//! use bistro::storage::Storage;
//!
//! let paths = BistroPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let mut restaurant = Restaurant::open(&storage, &settings);
//! ```

pub mod cli;
pub mod config;
pub mod containers;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BistroError;
