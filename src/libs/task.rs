use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder stored in the category column when the user picked
/// "no category" explicitly. Kept verbatim, never translated to NULL.
pub const NO_CATEGORY: &str = "Nenhuma categoria selecionada.";

/// A persisted to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: Option<String>,
    pub description: String,
    /// `YYYY-MM-DD`, or `None` for no due date.
    pub due_date: Option<String>,
    pub category: Option<String>,
}

impl Task {
    /// The mutable part of the record, used as the starting point of an edit.
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            category: self.category.clone(),
        }
    }

    /// Short label for lists: the name when there is one, otherwise the description.
    pub fn title(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.description,
        }
    }

    pub fn matches(&self, draft: &TaskDraft) -> bool {
        self.name == draft.name
            && self.description == draft.description
            && self.due_date == draft.due_date
            && self.category == draft.category
    }
}

/// The fields of a task as entered by the user, before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: Option<String>,
    pub description: String,
    pub due_date: Option<String>,
    pub category: Option<String>,
}

impl TaskDraft {
    pub fn new(description: &str) -> Self {
        TaskDraft {
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_due_date(mut self, due_date: &str) -> Self {
        self.due_date = Some(due_date.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// Suggested categories. The store does not restrict the column to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Household,
    Exercise,
    Maintenance,
    Leisure,
    Academic,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Household,
        Category::Exercise,
        Category::Maintenance,
        Category::Leisure,
        Category::Academic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Household => "Household",
            Category::Exercise => "Exercise",
            Category::Maintenance => "Maintenance",
            Category::Leisure => "Leisure",
            Category::Academic => "Academic",
        }
    }

    /// Case-insensitive lookup of a suggested category by label.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// True when the stored category means "nothing selected".
pub fn is_unset_category(category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(value) => value.is_empty() || value == NO_CATEGORY,
    }
}

/// Display text for a stored category value.
pub fn category_label(category: Option<&str>) -> &str {
    match category {
        Some(value) if !is_unset_category(Some(value)) => value,
        _ => "no category",
    }
}
