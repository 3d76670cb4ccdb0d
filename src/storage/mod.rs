//! Storage layer for Bistro
//!
//! Plain text files for the menu catalog and the revenue ledger, and an
//! atomically written JSON snapshot of the order session.

pub mod file_io;
pub mod records;
pub mod text_file;

pub use file_io::{read_json, write_json_atomic};
pub use records::{format_menu_line, format_revenue_line, parse_menu_line, parse_revenue_line};
pub use text_file::TextFile;

use std::path::PathBuf;

use crate::config::paths::BistroPaths;
use crate::error::BistroError;

/// Hands out the file handles each component persists through
#[derive(Debug, Clone)]
pub struct Storage {
    paths: BistroPaths,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: BistroPaths) -> Result<Self, BistroError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &BistroPaths {
        &self.paths
    }

    /// The menu catalog file
    pub fn menu_file(&self) -> TextFile {
        TextFile::new(self.paths.menu_file())
    }

    /// The completed orders ledger file
    pub fn ledger_file(&self) -> TextFile {
        TextFile::new(self.paths.completed_orders_file())
    }

    /// The session snapshot shared between invocations
    pub fn session_file(&self) -> PathBuf {
        self.paths.session_file()
    }
}
