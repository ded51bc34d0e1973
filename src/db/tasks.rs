use super::db::Db;
use crate::libs::task::{Task, TaskDraft};
use rusqlite::{params, Connection, Row};
use std::fmt::Display;
use std::path::Path;
use tracing::{debug, warn};

const PRAGMA_WAL: &str = "PRAGMA journal_mode = WAL";
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tarefa (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT,
    descricao TEXT,
    data_limite TEXT,
    categoria TEXT
);";
const INSERT_TASK: &str = "INSERT INTO tarefa (nome, descricao, data_limite, categoria) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT id, nome, descricao, data_limite, categoria FROM tarefa ORDER BY id";
const UPDATE_TASK: &str = "UPDATE tarefa SET nome = ?2, descricao = ?3, data_limite = ?4, categoria = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tarefa WHERE id = ?1";
const DELETE_ALL_TASKS: &str = "DELETE FROM tarefa";

/// Failures of the task table.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be opened or its schema created. Fatal.
    /// `location` is the database file, or `:memory:`.
    #[error("Failed to open task storage at {location}: {reason}")]
    Init { location: String, reason: String },
    #[error("Failed to read tasks: {0}")]
    Read(#[source] rusqlite::Error),
    #[error("Failed to write tasks: {0}")]
    Write(#[source] rusqlite::Error),
}

impl StoreError {
    pub fn init(location: &str, reason: impl Display) -> Self {
        StoreError::Init {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Durable CRUD over task records. No business validation happens here.
///
/// Write operations return the number of affected rows; zero is not an error.
pub trait TaskStore {
    /// Creates the table if it is missing. Never touches existing rows.
    fn initialize(&mut self) -> Result<(), StoreError>;
    /// Appends a row and returns its freshly assigned id.
    fn insert(&mut self, draft: &TaskDraft) -> Result<i64, StoreError>;
    /// Every row, ascending by id.
    fn list_all(&mut self) -> Result<Vec<Task>, StoreError>;
    /// Rewrites every mutable field of the row with `id`.
    fn update(&mut self, id: i64, draft: &TaskDraft) -> Result<usize, StoreError>;
    fn delete_by_id(&mut self, id: i64) -> Result<usize, StoreError>;
    fn delete_all(&mut self) -> Result<usize, StoreError>;
}

pub struct Tasks {
    pub conn: Connection,
    location: String,
}

impl Tasks {
    /// Opens the configured database and makes sure the table exists.
    pub fn new() -> Result<Tasks, StoreError> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Tasks, StoreError> {
        Self::from_db(Db::open(path)?)
    }

    pub fn open_in_memory() -> Result<Tasks, StoreError> {
        Self::from_db(Db::open_in_memory()?)
    }

    fn from_db(db: Db) -> Result<Tasks, StoreError> {
        let location = db.location();
        let mut tasks = Tasks { conn: db.conn, location };
        tasks.initialize()?;

        Ok(tasks)
    }

    /// Runs one write statement inside its own transaction.
    fn write(&mut self, sql: &str, params: impl rusqlite::Params) -> Result<usize, StoreError> {
        let tx = self.conn.transaction().map_err(StoreError::Write)?;
        let affected = tx.execute(sql, params).map_err(StoreError::Write)?;
        tx.commit().map_err(StoreError::Write)?;

        Ok(affected)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            due_date: row.get(3)?,
            category: row.get(4)?,
        })
    }
}

impl TaskStore for Tasks {
    fn initialize(&mut self) -> Result<(), StoreError> {
        // In-memory databases answer "memory" and keep their journal mode.
        let mode: String = self
            .conn
            .query_row(PRAGMA_WAL, [], |row| row.get(0))
            .map_err(|e| StoreError::init(&self.location, e))?;
        self.conn
            .execute(SCHEMA_TASKS, [])
            .map_err(|e| StoreError::init(&self.location, e))?;
        debug!(journal_mode = %mode, "task table ready");

        Ok(())
    }

    fn insert(&mut self, draft: &TaskDraft) -> Result<i64, StoreError> {
        let tx = self.conn.transaction().map_err(StoreError::Write)?;
        tx.execute(INSERT_TASK, params![draft.name, draft.description, draft.due_date, draft.category])
            .map_err(StoreError::Write)?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(StoreError::Write)?;
        debug!(id, "task inserted");

        Ok(id)
    }

    fn list_all(&mut self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS).map_err(StoreError::Read)?;
        let task_iter = stmt.query_map([], Self::map_row).map_err(StoreError::Read)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result.map_err(StoreError::Read)?);
        }
        debug!(count = tasks.len(), "tasks loaded");

        Ok(tasks)
    }

    fn update(&mut self, id: i64, draft: &TaskDraft) -> Result<usize, StoreError> {
        let affected = self.write(UPDATE_TASK, params![id, draft.name, draft.description, draft.due_date, draft.category])?;
        if affected == 0 {
            warn!(id, "update matched no task");
        }

        Ok(affected)
    }

    fn delete_by_id(&mut self, id: i64) -> Result<usize, StoreError> {
        let affected = self.write(DELETE_TASK, params![id])?;
        debug!(id, affected, "task deleted");

        Ok(affected)
    }

    fn delete_all(&mut self) -> Result<usize, StoreError> {
        let affected = self.write(DELETE_ALL_TASKS, [])?;
        debug!(affected, "all tasks deleted");

        Ok(affected)
    }
}
