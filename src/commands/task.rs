use super::{confirm, open_list, report};
use crate::db::tasks::TaskStore;
use crate::libs::config::Config;
use crate::libs::formatter::normalize_due_date;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskDraft, NO_CATEGORY};
use crate::libs::task_list::TaskList;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description (prompted for when omitted)
    description: Option<String>,
    #[arg(short, long)]
    name: Option<String>,
    /// Due date, YYYY-MM-DD or DD/MM/YYYY
    #[arg(short, long, value_parser = parse_due_date)]
    due: Option<String>,
    #[arg(short, long)]
    category: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    id: i64,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    id: i64,
    #[arg(short, long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// New due date, YYYY-MM-DD or DD/MM/YYYY
    #[arg(short, long, value_parser = parse_due_date, conflicts_with = "no_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    no_due: bool,
    #[arg(short, long, conflicts_with = "no_category")]
    category: Option<String>,
    /// Mark the task as having no category
    #[arg(long)]
    no_category: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: i64,
    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

fn parse_due_date(value: &str) -> Result<String, String> {
    normalize_due_date(value).ok_or_else(|| Message::InvalidDueDate(value.to_string()).to_string())
}

impl AddArgs {
    /// Draft from the command line. Without `--category` the task is stored
    /// as having no category selected.
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            name: self.name,
            description: self.description.unwrap_or_default(),
            due_date: self.due,
            category: Some(self.category.unwrap_or_else(|| NO_CATEGORY.to_string())),
        }
    }
}

pub async fn add(args: AddArgs) -> Result<()> {
    let list = open_list().await?;

    let interactive = args.description.is_none();
    let mut draft = args.into_draft();
    if interactive {
        draft = prompt_draft(&draft, &Config::read()?.categories)?;
    }

    if create(&list, draft).await {
        show_tasks(&list.snapshot().await);
    }
    Ok(())
}

/// Creates a task and prints the outcome. Returns whether it was stored.
pub async fn create<S: TaskStore>(list: &TaskList<S>, draft: TaskDraft) -> bool {
    match list.create(draft).await {
        Ok(id) => {
            msg_success!(Message::TaskCreated(id));
            true
        }
        Err(e) => {
            report(&e);
            false
        }
    }
}

pub async fn list() -> Result<()> {
    let list = open_list().await?;
    show_tasks(&list.snapshot().await);
    Ok(())
}

pub async fn show(args: ShowArgs) -> Result<()> {
    let list = open_list().await?;

    match list.get(args.id).await {
        Some(task) => {
            msg_print!(Message::TaskDetailsHeader(task.id), true);
            View::task(&task);
        }
        None => msg_error!(Message::TaskNotFoundWithId(args.id)),
    }
    Ok(())
}

pub async fn edit(args: EditArgs) -> Result<()> {
    let list = open_list().await?;

    let task = match list.get(args.id).await {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let has_flags = args.name.is_some()
        || args.description.is_some()
        || args.due.is_some()
        || args.no_due
        || args.category.is_some()
        || args.no_category;

    let draft = if has_flags {
        let mut draft = task.draft();
        if let Some(name) = args.name {
            draft.name = Some(name);
        }
        if let Some(description) = args.description {
            draft.description = description;
        }
        if args.no_due {
            draft.due_date = None;
        } else if args.due.is_some() {
            draft.due_date = args.due;
        }
        if args.no_category {
            draft.category = Some(NO_CATEGORY.to_string());
        } else if args.category.is_some() {
            draft.category = args.category;
        }
        draft
    } else {
        prompt_draft(&task.draft(), &Config::read()?.categories)?
    };

    if task.matches(&draft) {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if update(&list, &task, draft).await {
        show_tasks(&list.snapshot().await);
    }
    Ok(())
}

/// Saves an edited draft and prints the outcome. Returns whether it was stored.
pub async fn update<S: TaskStore>(list: &TaskList<S>, task: &Task, draft: TaskDraft) -> bool {
    match list.update(task.id, draft).await {
        Ok(()) => {
            msg_success!(Message::TaskUpdated(task.id));
            true
        }
        Err(e) => {
            report(&e);
            false
        }
    }
}

pub async fn delete(args: DeleteArgs) -> Result<()> {
    let list = open_list().await?;

    let task = match list.get(args.id).await {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    if delete_one(&list, &task, args.yes).await? {
        show_tasks(&list.snapshot().await);
    }
    Ok(())
}

/// Asks for confirmation, then deletes `task`. Returns whether it was deleted.
pub async fn delete_one<S: TaskStore>(list: &TaskList<S>, task: &Task, assume_yes: bool) -> Result<bool> {
    if !confirm(Message::ConfirmDeleteTask(task.title().to_string()), assume_yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(false);
    }

    match list.delete_one(task.id).await {
        Ok(()) => {
            msg_success!(Message::TaskDeleted(task.id));
            Ok(true)
        }
        Err(e) => {
            report(&e);
            Ok(false)
        }
    }
}

pub async fn clear(args: ClearArgs) -> Result<()> {
    let list = open_list().await?;
    delete_all(&list, args.yes).await?;
    Ok(())
}

/// Asks for confirmation, then deletes every task. Returns whether anything was deleted.
pub async fn delete_all<S: TaskStore>(list: &TaskList<S>, assume_yes: bool) -> Result<bool> {
    let count = list.len().await;
    if count == 0 {
        msg_info!(Message::NoTasks);
        return Ok(false);
    }

    if !confirm(Message::ConfirmDeleteAllTasks(count), assume_yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(false);
    }

    match list.delete_all().await {
        Ok(()) => {
            msg_success!(Message::AllTasksDeleted(count));
            Ok(true)
        }
        Err(e) => {
            report(&e);
            Ok(false)
        }
    }
}

pub fn show_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        msg_info!(Message::NoTasks);
        return;
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(tasks);
}

/// Task form. Starts from `initial` and returns what the user entered.
///
/// The description may be left empty here; the list rejects it on save so
/// the rule lives in one place.
pub fn prompt_draft(initial: &TaskDraft, categories: &[String]) -> Result<TaskDraft> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskName.to_string())
        .with_initial_text(initial.name.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(initial.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let due_date = loop {
        let input: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDueDate.to_string())
            .with_initial_text(initial.due_date.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            break None;
        }
        match normalize_due_date(&input) {
            Some(date) => break Some(date),
            None => msg_error!(Message::InvalidDueDate(input)),
        }
    };

    let category = prompt_category(initial.category.as_deref(), categories)?;

    Ok(TaskDraft {
        name: if name.is_empty() { None } else { Some(name) },
        description,
        due_date,
        category,
    })
}

fn prompt_category(current: Option<&str>, categories: &[String]) -> Result<Option<String>> {
    let mut items = vec![Message::NoCategoryOption.to_string()];
    items.extend(categories.iter().cloned());
    // A stored value outside the suggestions stays selectable.
    if let Some(value) = current {
        if value != NO_CATEGORY && !categories.iter().any(|category| category == value) {
            items.push(value.to_string());
        }
    }
    items.push(Message::OtherCategoryOption.to_string());

    let default = current
        .and_then(|value| items.iter().position(|item| item == value))
        .unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&items)
        .default(default)
        .interact()?;

    let category = if selection == 0 {
        NO_CATEGORY.to_string()
    } else if selection == items.len() - 1 {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCustomCategory.to_string())
            .interact_text()?
    } else {
        items[selection].clone()
    };
    Ok(Some(category))
}
