//! The in-memory task list and the rules for keeping it in step with the store.
//!
//! [`TaskList`] owns the snapshot that presentation renders from. Every
//! mutation goes through the store and, when it succeeds, the snapshot is
//! replaced by a fresh read of the whole table. Nothing is patched locally,
//! so every entry shown is a row that exists in the store.
//!
//! The store and the snapshot sit behind one async mutex that each operation
//! holds from its store call through the refresh. Operations therefore run
//! one at a time, in the order they were dispatched, and a refresh can never
//! overwrite the snapshot of a mutation that is still in flight.
//!
//! ```rust,no_run
//! use todolist::db::tasks::Tasks;
//! use todolist::libs::task::TaskDraft;
//! use todolist::libs::task_list::TaskList;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let list = TaskList::load(Tasks::new()?).await?;
//! let id = list.create(TaskDraft::new("Buy milk")).await?;
//! list.delete_one(id).await?;
//! # Ok(())
//! # }
//! ```

use crate::db::tasks::{StoreError, TaskStore};
use crate::libs::task::{Task, TaskDraft};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Task description must not be empty")]
    EmptyDescription,
}

/// Errors surfaced by [`TaskList`] operations. All are recoverable: the
/// snapshot is left as it was and the user may repeat the action.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The mutation itself failed; nothing was written.
    #[error("Failed to save changes: {0}")]
    Persistence(#[source] StoreError),
    /// Reloading the snapshot failed; the previous snapshot is retained.
    #[error("Failed to refresh the task list: {0}")]
    RefreshFailed(#[source] StoreError),
}

struct ListState<S> {
    store: S,
    snapshot: Vec<Task>,
}

impl<S: TaskStore> ListState<S> {
    fn refresh(&mut self) -> Result<(), ListError> {
        match self.store.list_all() {
            Ok(tasks) => {
                self.snapshot = tasks;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "refresh failed, keeping previous snapshot");
                Err(ListError::RefreshFailed(e))
            }
        }
    }
}

pub struct TaskList<S> {
    state: Mutex<ListState<S>>,
}

impl<S: TaskStore> TaskList<S> {
    /// Wraps an initialized store. The snapshot starts empty until [`TaskList::refresh`].
    pub fn new(store: S) -> Self {
        TaskList {
            state: Mutex::new(ListState { store, snapshot: Vec::new() }),
        }
    }

    /// Wraps `store` and loads the initial snapshot.
    pub async fn load(store: S) -> Result<Self, ListError> {
        let list = Self::new(store);
        list.refresh().await?;
        Ok(list)
    }

    pub async fn refresh(&self) -> Result<(), ListError> {
        self.state.lock().await.refresh()
    }

    /// Validates and inserts `draft`, then reloads. Returns the new id.
    pub async fn create(&self, draft: TaskDraft) -> Result<i64, ListError> {
        validate(&draft)?;

        let mut state = self.state.lock().await;
        let id = state.store.insert(&draft).map_err(ListError::Persistence)?;
        debug!(id, "task created");
        state.refresh()?;

        Ok(id)
    }

    /// Validates `draft` and rewrites every field of task `id`, then reloads.
    ///
    /// An unknown id is not an error; the list simply does not change.
    pub async fn update(&self, id: i64, draft: TaskDraft) -> Result<(), ListError> {
        validate(&draft)?;

        let mut state = self.state.lock().await;
        let affected = state.store.update(id, &draft).map_err(ListError::Persistence)?;
        debug!(id, affected, "task updated");
        state.refresh()
    }

    /// Removes task `id`, then reloads. Callers confirm with the user first.
    pub async fn delete_one(&self, id: i64) -> Result<(), ListError> {
        let mut state = self.state.lock().await;
        state.store.delete_by_id(id).map_err(ListError::Persistence)?;
        state.refresh()
    }

    /// Removes every task, then reloads. Callers confirm with the user first.
    pub async fn delete_all(&self) -> Result<(), ListError> {
        let mut state = self.state.lock().await;
        state.store.delete_all().map_err(ListError::Persistence)?;
        state.refresh()
    }

    /// A copy of the current snapshot, ascending by id.
    pub async fn snapshot(&self) -> Vec<Task> {
        self.state.lock().await.snapshot.clone()
    }

    pub async fn get(&self, id: i64) -> Option<Task> {
        self.state.lock().await.snapshot.iter().find(|task| task.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.snapshot.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.snapshot.is_empty()
    }

    /// Gives the store back, e.g. to reopen it elsewhere.
    pub fn into_store(self) -> S {
        self.state.into_inner().store
    }
}

/// The only business rule: a task needs a description.
pub fn validate(draft: &TaskDraft) -> Result<(), ValidationError> {
    if draft.description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}
