//! Interactive mode: a menu over the task list where each task opens as a
//! card (see [`crate::libs::card`]).

use super::task::{create, delete_all, delete_one, prompt_draft, show_tasks, update};
use crate::db::tasks::Tasks;
use crate::libs::card::{Card, CardAction, CardEvent, CardState};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskDraft};
use crate::libs::task_list::TaskList;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

pub async fn run(list: &TaskList<Tasks>, config: &Config) -> Result<()> {
    loop {
        let tasks = list.snapshot().await;
        show_tasks(&tasks);

        let mut items: Vec<String> = tasks.iter().map(|task| format!("{} - {}", task.id, task.title())).collect();
        items.push(Message::MenuAddTask.to_string());
        items.push(Message::MenuDeleteAll.to_string());
        items.push(Message::MenuQuit.to_string());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&items)
            .default(0)
            .interact()?;

        match selection.checked_sub(tasks.len()) {
            None => open_card(list, &tasks[selection], config).await?,
            Some(0) => {
                let draft = prompt_draft(&TaskDraft::default(), &config.categories)?;
                create(list, draft).await;
            }
            Some(1) => {
                delete_all(list, false).await?;
            }
            Some(_) => return Ok(()),
        }
    }
}

/// Drives one card from `Expanded` until it collapses again.
async fn open_card(list: &TaskList<Tasks>, task: &Task, config: &Config) -> Result<()> {
    let mut card = Card::new();
    card.handle(CardEvent::Tap);
    let mut draft = task.draft();

    while card.is_open() {
        let event = match card.state {
            CardState::Viewing => {
                msg_print!(Message::TaskDetailsHeader(task.id), true);
                View::task(task);
                choose(task, &[(Message::CardEdit, CardEvent::Edit), (Message::CardDelete, CardEvent::Delete), (Message::CardCollapse, CardEvent::Tap)])?
            }
            CardState::Expanded => choose(
                task,
                &[
                    (Message::CardView, CardEvent::View),
                    (Message::CardEdit, CardEvent::Edit),
                    (Message::CardDelete, CardEvent::Delete),
                    (Message::CardCollapse, CardEvent::Tap),
                ],
            )?,
            CardState::Editing => {
                draft = prompt_draft(&draft, &config.categories)?;
                choose(task, &[(Message::CardSave, CardEvent::Save), (Message::CardCancel, CardEvent::Cancel)])?
            }
            CardState::Collapsed => break,
        };

        match card.handle(event) {
            Some(CardAction::Update) => {
                if task.matches(&draft) {
                    msg_info!(Message::NoChangesDetected);
                    card.handle(CardEvent::Saved);
                } else if update(list, task, draft.clone()).await {
                    card.handle(CardEvent::Saved);
                }
            }
            Some(CardAction::ConfirmDelete) => {
                if delete_one(list, task, false).await? {
                    return Ok(());
                }
            }
            None => {}
        }
    }
    Ok(())
}

fn choose(task: &Task, options: &[(Message, CardEvent)]) -> Result<CardEvent> {
    let labels: Vec<String> = options.iter().map(|(label, _)| label.to_string()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskAction(task.title().to_string()).to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[selection].1)
}
