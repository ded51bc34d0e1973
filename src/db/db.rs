use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::tasks::StoreError;

pub struct Db {
    pub conn: Connection,
    pub path: Option<PathBuf>,
}

impl Db {
    /// Opens the database named in the configuration inside the data directory.
    pub fn new() -> Result<Db, StoreError> {
        let config = Config::read().map_err(|e| StoreError::init("config", e))?;
        let db_file_path = DataStorage::new()
            .get_path(&config.database)
            .map_err(|e| StoreError::init(&config.database, e))?;

        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db, StoreError> {
        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path).map_err(|e| StoreError::init(&path.display().to_string(), e))?;

        Ok(Db {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Db, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::init(":memory:", e))?;

        Ok(Db { conn, path: None })
    }

    /// Where the database lives, for error messages.
    pub fn location(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => ":memory:".to_string(),
        }
    }
}
