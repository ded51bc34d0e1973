//! # todolist
//!
//! A command-line to-do list kept in a local SQLite database.
//!
//! ## Features
//!
//! - **Tasks**: name, description, due date and category per item
//! - **Always fresh**: the list is re-read from the database after every change
//! - **Safe deletes**: removing one task or all of them asks for confirmation
//! - **Interactive mode**: browse, expand, edit and delete tasks from a menu
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
