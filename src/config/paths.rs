//! Where Bistro keeps its files
//!
//! Everything lives under one base directory:
//!
//! ```text
//! <base>/config.json
//! <base>/data/menu.txt
//! <base>/data/completed_orders.txt
//! <base>/data/session.json
//! ```
//!
//! The base is `BISTRO_DATA_DIR` when set, otherwise `bistro` under the
//! platform config directory (`$XDG_CONFIG_HOME`, `~/.config`, `%APPDATA%`).

use std::path::PathBuf;

use crate::error::BistroError;

const DATA_DIR_ENV: &str = "BISTRO_DATA_DIR";
const APP_DIR: &str = "bistro";

/// File locations derived from the base directory
#[derive(Debug, Clone)]
pub struct BistroPaths {
    base_dir: PathBuf,
}

impl BistroPaths {
    /// Resolve the base directory from the environment
    ///
    /// Fails only when neither the override nor a home/config directory is
    /// available.
    pub fn new() -> Result<Self, BistroError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => platform_config_dir()?.join(APP_DIR),
        };
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn menu_file(&self) -> PathBuf {
        self.data_dir().join("menu.txt")
    }

    /// Revenue header plus the summaries of saved orders
    pub fn completed_orders_file(&self) -> PathBuf {
        self.data_dir().join("completed_orders.txt")
    }

    /// Active queue and unsaved completed orders between runs
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), BistroError> {
        let data_dir = self.data_dir();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            BistroError::Io(format!("Cannot create {}: {}", data_dir.display(), e))
        })
    }

    /// `bistro init` has written a settings file
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn platform_config_dir() -> Result<PathBuf, BistroError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .ok_or_else(|| BistroError::Config("neither XDG_CONFIG_HOME nor HOME is set".into()))
}

#[cfg(windows)]
fn platform_config_dir() -> Result<PathBuf, BistroError> {
    std::env::var_os("APPDATA")
        .map(PathBuf::from)
        .ok_or_else(|| BistroError::Config("APPDATA is not set".into()))
}
