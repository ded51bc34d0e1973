#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use todolist::commands::task::{create, delete_all, delete_one, update, AddArgs};
    use todolist::db::tasks::{StoreError, TaskStore, Tasks};
    use todolist::libs::task::{Task, TaskDraft, NO_CATEGORY};
    use todolist::libs::task_list::TaskList;

    #[derive(Parser)]
    struct AddCommand {
        #[command(flatten)]
        args: AddArgs,
    }

    fn add_draft(argv: &[&str]) -> TaskDraft {
        let argv = std::iter::once("todolist").chain(argv.iter().copied());
        AddCommand::try_parse_from(argv).unwrap().args.into_draft()
    }

    /// Real in-memory store that counts write calls and can refuse them.
    struct GuardedStore {
        inner: Tasks,
        writes: Arc<AtomicUsize>,
        refuse: Arc<AtomicBool>,
    }

    impl GuardedStore {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicBool>) {
            let writes = Arc::new(AtomicUsize::new(0));
            let refuse = Arc::new(AtomicBool::new(false));
            let store = GuardedStore {
                inner: Tasks::open_in_memory().unwrap(),
                writes: writes.clone(),
                refuse: refuse.clone(),
            };
            (store, writes, refuse)
        }

        fn write(&self) -> Result<(), StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.refuse.load(Ordering::SeqCst) {
                return Err(StoreError::Write(rusqlite::Error::QueryReturnedNoRows));
            }
            Ok(())
        }
    }

    impl TaskStore for GuardedStore {
        fn initialize(&mut self) -> Result<(), StoreError> {
            self.inner.initialize()
        }

        fn insert(&mut self, draft: &TaskDraft) -> Result<i64, StoreError> {
            self.write()?;
            self.inner.insert(draft)
        }

        fn list_all(&mut self) -> Result<Vec<Task>, StoreError> {
            self.inner.list_all()
        }

        fn update(&mut self, id: i64, draft: &TaskDraft) -> Result<usize, StoreError> {
            self.write()?;
            self.inner.update(id, draft)
        }

        fn delete_by_id(&mut self, id: i64) -> Result<usize, StoreError> {
            self.write()?;
            self.inner.delete_by_id(id)
        }

        fn delete_all(&mut self) -> Result<usize, StoreError> {
            self.write()?;
            self.inner.delete_all()
        }
    }

    async fn memory_list() -> TaskList<Tasks> {
        TaskList::load(Tasks::open_in_memory().unwrap()).await.unwrap()
    }

    #[test]
    fn test_add_without_category_stores_sentinel() {
        let draft = add_draft(&["Buy milk"]);
        assert_eq!(draft.description, "Buy milk");
        assert_eq!(draft.category.as_deref(), Some(NO_CATEGORY));
        assert_eq!(draft.name, None);
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn test_add_with_flags() {
        let draft = add_draft(&["Study", "--name", "Exam", "--due", "10/06/2024", "--category", "Academic"]);
        assert_eq!(draft.name.as_deref(), Some("Exam"));
        assert_eq!(draft.due_date.as_deref(), Some("2024-06-10"));
        assert_eq!(draft.category.as_deref(), Some("Academic"));
    }

    #[test]
    fn test_add_without_description_keeps_sentinel_for_the_form() {
        let draft = add_draft(&["--name", "Later"]);
        assert!(draft.description.is_empty());
        assert_eq!(draft.category.as_deref(), Some(NO_CATEGORY));
    }

    #[tokio::test]
    async fn test_added_task_round_trips_sentinel() {
        let list = memory_list().await;
        assert!(create(&list, add_draft(&["Buy milk"])).await);

        let stored = list.snapshot().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].category.as_deref(), Some(NO_CATEGORY));
    }

    #[tokio::test]
    async fn test_create_and_update_helpers() {
        let list = memory_list().await;
        assert!(create(&list, TaskDraft::new("Walk the dog")).await);
        assert!(!create(&list, TaskDraft::new("")).await);
        assert_eq!(list.len().await, 1);

        let task = list.get(1).await.unwrap();
        assert!(update(&list, &task, TaskDraft::new("Walk the cat")).await);
        assert_eq!(list.get(1).await.unwrap().description, "Walk the cat");

        assert!(!update(&list, &task, TaskDraft::new("")).await);
        assert_eq!(list.get(1).await.unwrap().description, "Walk the cat");
    }

    #[tokio::test]
    async fn test_delete_one_with_assume_yes() {
        let list = memory_list().await;
        list.create(TaskDraft::new("First")).await.unwrap();
        list.create(TaskDraft::new("Second")).await.unwrap();
        let first = list.get(1).await.unwrap();

        assert!(delete_one(&list, &first, true).await.unwrap());
        let ids: Vec<i64> = list.snapshot().await.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_delete_all_with_assume_yes() {
        let list = memory_list().await;
        list.create(TaskDraft::new("First")).await.unwrap();
        list.create(TaskDraft::new("Second")).await.unwrap();

        assert!(delete_all(&list, true).await.unwrap());
        assert!(list.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_all_on_empty_list_skips_store() {
        let (store, writes, _) = GuardedStore::new();
        let list = TaskList::load(store).await.unwrap();

        assert!(!delete_all(&list, true).await.unwrap());
        assert_eq!(writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_operations_are_reported_not_returned() {
        let (store, _, refuse) = GuardedStore::new();
        let list = TaskList::load(store).await.unwrap();
        list.create(TaskDraft::new("Keep me")).await.unwrap();
        let before = list.snapshot().await;
        let task = before[0].clone();

        refuse.store(true, Ordering::SeqCst);
        assert!(!create(&list, TaskDraft::new("New")).await);
        assert!(!update(&list, &task, TaskDraft::new("Changed")).await);
        assert!(!delete_one(&list, &task, true).await.unwrap());
        assert!(!delete_all(&list, true).await.unwrap());
        assert_eq!(list.snapshot().await, before);
    }
}
