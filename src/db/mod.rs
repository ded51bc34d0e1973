//! Database layer for the todolist application.
//!
//! A single SQLite table, `tarefa`, holds every task:
//!
//! ```text
//! tarefa(id INTEGER PRIMARY KEY AUTOINCREMENT,
//!        nome TEXT, descricao TEXT, data_limite TEXT, categoria TEXT)
//! ```
//!
//! The schema is created on open if it is missing; existing rows are never
//! touched. There are no migrations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::db::tasks::{TaskStore, Tasks};
//! use todolist::libs::task::TaskDraft;
//!
//! let mut tasks = Tasks::new()?;
//! let id = tasks.insert(&TaskDraft::new("Buy milk").with_category("Household"))?;
//! assert!(tasks.list_all()?.iter().any(|task| task.id == id));
//! # Ok::<(), todolist::db::tasks::StoreError>(())
//! ```

/// Connection management: resolves the database file and opens it.
pub mod db;

/// The task table and the [`tasks::TaskStore`] contract.
pub mod tasks;
