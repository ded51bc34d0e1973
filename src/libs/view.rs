use super::formatter::format_due_date;
use super::task::{category_label, Task};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION", "DUE DATE", "CATEGORY"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.name.as_deref().unwrap_or(""),
                task.description,
                format_due_date(task.due_date.as_deref()),
                category_label(task.category.as_deref())
            ]);
        }
        table.printstd();
    }

    /// Expanded view of a single task.
    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["Name", task.name.as_deref().unwrap_or("")]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Due date", format_due_date(task.due_date.as_deref())]);
        table.add_row(row!["Category", category_label(task.category.as_deref())]);
        table.printstd();
    }

    pub fn categories(categories: &[String]) {
        let mut table = Table::new();

        table.add_row(row!["#", "CATEGORY"]);
        for (index, category) in categories.iter().enumerate() {
            table.add_row(row![index + 1, category]);
        }
        table.printstd();
    }
}
