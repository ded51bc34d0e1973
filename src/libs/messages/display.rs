//! Wording of every [`Message`].
//!
//! Kept in one match so that all user-facing text can be reviewed (or
//! translated) in a single place.

use super::types::Message;
use crate::libs::formatter::NO_DUE_DATE;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} added", id),
            Message::TaskUpdated(id) => format!("Task {} saved", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::AllTasksDeleted(count) => format!("Deleted all tasks ({})", count),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::NoTasks => "There are no tasks".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TaskDetailsHeader(id) => format!("Task {}:", id),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::InvalidDueDate(value) => {
                format!("'{}' is not a date. Use YYYY-MM-DD or DD/MM/YYYY, or leave it empty for {}", value, NO_DUE_DATE)
            }
            Message::CategoriesHeader => "Suggested categories:".to_string(),

            // === CONFIRMATIONS ===
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}' from the list?", title),
            Message::ConfirmDeleteAllTasks(count) => format!("Delete all {} tasks?", count),

            // === INTERACTIVE SESSION ===
            Message::SelectAction => "Select a task or an action".to_string(),
            Message::SelectTaskAction(title) => format!("What do you want to do with '{}'?", title),
            Message::MenuAddTask => "+ Add task".to_string(),
            Message::MenuDeleteAll => "✖ Delete all tasks".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::CardView => "View".to_string(),
            Message::CardEdit => "Edit".to_string(),
            Message::CardDelete => "Delete".to_string(),
            Message::CardCollapse => "Back".to_string(),
            Message::CardSave => "Save".to_string(),
            Message::CardCancel => "Cancel".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "todolist configuration".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Name".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::NoCategoryOption => "No category".to_string(),
            Message::OtherCategoryOption => "Other...".to_string(),
            Message::PromptCustomCategory => "Category name".to_string(),
            Message::PromptDatabase => "Database file".to_string(),
            Message::PromptSelectCategories => "Categories to suggest".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
