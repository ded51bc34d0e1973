#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use todolist::db::tasks::{StoreError, TaskStore, Tasks};
    use todolist::libs::task::{Task, TaskDraft};
    use todolist::libs::task_list::{ListError, TaskList, ValidationError};

    /// Wraps a real in-memory store, counting calls and failing on request.
    /// The switches are shared so a test can flip them while the list owns the store.
    #[derive(Clone, Default)]
    struct Switches {
        calls: Arc<AtomicUsize>,
        fail_writes: Arc<AtomicBool>,
        fail_reads: Arc<AtomicBool>,
    }

    impl Switches {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        fn fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }
    }

    struct FlakyStore {
        inner: Tasks,
        switches: Switches,
    }

    impl FlakyStore {
        fn new() -> (Self, Switches) {
            let switches = Switches::default();
            let store = FlakyStore {
                inner: Tasks::open_in_memory().unwrap(),
                switches: switches.clone(),
            };
            (store, switches)
        }

        fn write(&self) -> Result<(), StoreError> {
            self.switches.calls.fetch_add(1, Ordering::SeqCst);
            if self.switches.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::Write(rusqlite::Error::QueryReturnedNoRows));
            }
            Ok(())
        }
    }

    impl TaskStore for FlakyStore {
        fn initialize(&mut self) -> Result<(), StoreError> {
            self.inner.initialize()
        }

        fn insert(&mut self, draft: &TaskDraft) -> Result<i64, StoreError> {
            self.write()?;
            self.inner.insert(draft)
        }

        fn list_all(&mut self) -> Result<Vec<Task>, StoreError> {
            self.switches.calls.fetch_add(1, Ordering::SeqCst);
            if self.switches.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::Read(rusqlite::Error::QueryReturnedNoRows));
            }
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

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|task| task.id).collect()
    }

    #[tokio::test]
    async fn test_crud_scenario() {
        let list = memory_list().await;
        assert!(list.is_empty().await);

        let first = list.create(TaskDraft::new("Buy milk")).await.unwrap();
        assert_eq!(first, 1);
        assert_eq!(ids(&list.snapshot().await), vec![1]);

        list.create(TaskDraft::new("Walk the dog")).await.unwrap();
        assert_eq!(ids(&list.snapshot().await), vec![1, 2]);

        list.delete_one(1).await.unwrap();
        assert_eq!(ids(&list.snapshot().await), vec![2]);

        list.delete_all().await.unwrap();
        assert!(list.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_adds_exactly_one_matching_record() {
        let list = memory_list().await;
        list.create(TaskDraft::new("Existing")).await.unwrap();
        let before = list.len().await;

        let draft = TaskDraft::new("Study for exam")
            .with_name("Exam")
            .with_due_date("2024-06-10")
            .with_category("Academic");
        let id = list.create(draft.clone()).await.unwrap();

        let snapshot = list.snapshot().await;
        assert_eq!(snapshot.len(), before + 1);
        let created = list.get(id).await.unwrap();
        assert!(created.matches(&draft));
        assert_eq!(created.draft(), draft);
    }

    #[tokio::test]
    async fn test_empty_description_rejected_without_store_call() {
        let (store, switches) = FlakyStore::new();
        let list = TaskList::load(store).await.unwrap();
        list.create(TaskDraft::new("Valid")).await.unwrap();
        let before = list.snapshot().await;
        let calls = switches.calls();

        let result = list.create(TaskDraft::new("")).await;
        assert!(matches!(result, Err(ListError::Validation(ValidationError::EmptyDescription))));

        let result = list.update(1, TaskDraft::new("").with_name("No description")).await;
        assert!(matches!(result, Err(ListError::Validation(_))));

        assert_eq!(list.snapshot().await, before);
        assert_eq!(switches.calls(), calls);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_snapshot() {
        let (store, switches) = FlakyStore::new();
        let list = TaskList::load(store).await.unwrap();
        list.create(TaskDraft::new("Already there")).await.unwrap();
        let before = list.snapshot().await;

        switches.fail_writes(true);
        assert!(matches!(list.create(TaskDraft::new("New")).await, Err(ListError::Persistence(_))));
        assert!(matches!(list.update(1, TaskDraft::new("Changed")).await, Err(ListError::Persistence(_))));
        assert!(matches!(list.delete_one(1).await, Err(ListError::Persistence(_))));
        assert!(matches!(list.delete_all().await, Err(ListError::Persistence(_))));
        assert_eq!(list.snapshot().await, before);

        // Retrying once the medium recovers works.
        switches.fail_writes(false);
        list.refresh().await.unwrap();
        assert_eq!(list.snapshot().await, before);
        list.create(TaskDraft::new("New")).await.unwrap();
        assert_eq!(list.len().await, 2);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_snapshot() {
        let (store, switches) = FlakyStore::new();
        let list = TaskList::load(store).await.unwrap();
        list.create(TaskDraft::new("Visible")).await.unwrap();
        let before = list.snapshot().await;

        switches.fail_reads(true);
        assert!(matches!(list.refresh().await, Err(ListError::RefreshFailed(_))));
        assert_eq!(list.snapshot().await, before);

        switches.fail_reads(false);
        list.refresh().await.unwrap();
        assert_eq!(list.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_refresh_failure_after_successful_write() {
        let (store, switches) = FlakyStore::new();
        let list = TaskList::load(store).await.unwrap();
        list.create(TaskDraft::new("Old")).await.unwrap();
        let before = list.snapshot().await;

        switches.fail_reads(true);
        let result = list.create(TaskDraft::new("Persisted anyway")).await;
        assert!(matches!(result, Err(ListError::RefreshFailed(_))));
        assert_eq!(list.snapshot().await, before);

        let mut store = list.into_store();
        let stored = store.inner.list_all().unwrap();
        assert_eq!(stored.len(), before.len() + 1);
    }

    #[tokio::test]
    async fn test_missing_id_leaves_count_unchanged() {
        let list = memory_list().await;
        list.create(TaskDraft::new("One")).await.unwrap();
        list.create(TaskDraft::new("Two")).await.unwrap();

        list.update(99, TaskDraft::new("Nobody")).await.unwrap();
        list.delete_one(99).await.unwrap();

        let snapshot = list.snapshot().await;
        assert_eq!(ids(&snapshot), vec![1, 2]);
        assert_eq!(snapshot[0].description, "One");
    }

    #[tokio::test]
    async fn test_update_rewrites_record() {
        let list = memory_list().await;
        let id = list
            .create(TaskDraft::new("Gym").with_name("Workout").with_category("Exercise"))
            .await
            .unwrap();

        let draft = TaskDraft::new("Gym, legs day").with_due_date("2024-03-05");
        list.update(id, draft.clone()).await.unwrap();

        let updated = list.get(id).await.unwrap();
        assert_eq!(updated.draft(), draft);
    }

    #[tokio::test]
    async fn test_delete_all_empties_any_snapshot() {
        for size in [0usize, 1, 7] {
            let list = memory_list().await;
            for i in 0..size {
                list.create(TaskDraft::new(&format!("Task {}", i))).await.unwrap();
            }
            assert_eq!(list.len().await, size);

            list.delete_all().await.unwrap();
            assert!(list.is_empty().await);
        }
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_serialized() {
        let list = Arc::new(memory_list().await);

        let mut handles = Vec::new();
        for i in 0..10 {
            let list = Arc::clone(&list);
            handles.push(tokio::spawn(async move {
                list.create(TaskDraft::new(&format!("Task {}", i))).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = list.snapshot().await;
        assert_eq!(ids(&snapshot), (1..=10).collect::<Vec<i64>>());
    }
}
