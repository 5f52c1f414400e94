//! Path management for the categories app
//!
//! ## Path Resolution Order
//!
//! 1. `CATEGORIES_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/categories` or `~/.config/categories`
//! 3. Windows: `%APPDATA%\categories`

use std::path::PathBuf;

use crate::error::CategoriesError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CATEGORIES_DATA_DIR";

/// Manages all paths used by the app
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
}

impl AppPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, CategoriesError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the persisted blobs (one file per storage key)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CategoriesError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CategoriesError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CategoriesError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CategoriesError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                CategoriesError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("categories"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CategoriesError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CategoriesError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("categories"))
}
