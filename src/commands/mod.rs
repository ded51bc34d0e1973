pub mod init;
pub mod session;
pub mod task;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task_list::{ListError, TaskList};
use crate::{msg_error, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Show one task in full")]
    Show(task::ShowArgs),
    #[command(about = "Edit a task")]
    Edit(task::EditArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "Delete all tasks")]
    Clear(task::ClearArgs),
    #[command(about = "List suggested categories")]
    Categories,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Add(args)) => task::add(args).await,
            Some(Commands::List) => task::list().await,
            Some(Commands::Show(args)) => task::show(args).await,
            Some(Commands::Edit(args)) => task::edit(args).await,
            Some(Commands::Delete(args)) => task::delete(args).await,
            Some(Commands::Clear(args)) => task::clear(args).await,
            Some(Commands::Categories) => init::categories(),
            None => {
                let list = open_list().await?;
                session::run(&list, &Config::read()?).await
            }
        }
    }
}

/// Opens the configured store and loads the first snapshot.
///
/// A store that cannot be opened is fatal and propagates to `main`.
pub async fn open_list() -> Result<TaskList<Tasks>> {
    let store = Tasks::new()?;
    Ok(TaskList::load(store).await?)
}

/// Confirmation boundary for destructive actions. Anything but "yes" aborts.
pub fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact_opt()?;
    Ok(confirmed.unwrap_or(false))
}

/// Surfaces a failed list operation to the user.
pub fn report(error: &ListError) {
    match error {
        ListError::RefreshFailed(_) => msg_warning!(error),
        _ => msg_error!(error),
    }
}
