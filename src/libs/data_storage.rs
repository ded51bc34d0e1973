//! Platform-specific location of the application's data files.
//!
//! The database and `config.json` live in one directory per user:
//!
//! - **Windows**: `%LOCALAPPDATA%\todolist\todolist`
//! - **macOS**: `~/Library/Application Support/todolist/todolist`
//! - **Linux**: `~/.local/share/todolist/todolist`

use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "todolist";
pub const APP_NAME: &str = "todolist";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Storage rooted at an explicit directory instead of the platform default.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the full path of `file_name`, creating the data directory on first use.
    ///
    /// An absolute `file_name` is returned as is.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        let file_path = Path::new(file_name);
        if file_path.is_absolute() {
            return Ok(file_path.to_path_buf());
        }
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
