//! Core library modules for the todolist application.
//!
//! - **Task model**: [`task`] records, drafts and categories
//! - **List controller**: [`task_list`] snapshot plus validated, refreshing mutations
//! - **Presentation helpers**: [`card`], [`formatter`], [`view`], [`messages`]
//! - **Infrastructure**: [`config`], [`data_storage`]

pub mod card;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod task_list;
pub mod view;
