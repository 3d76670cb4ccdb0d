//! Configuration module for Bistro
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BistroPaths;
pub use settings::{LedgerPolicy, Settings};
