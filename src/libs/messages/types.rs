/// Every user-visible text of the application.
///
/// The wording lives in `display.rs`; code refers to messages by variant so
/// the same notice always reads the same way.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    AllTasksDeleted(usize), // count before deletion
    TaskNotFoundWithId(i64),
    NoTasks,
    TasksHeader,
    TaskDetailsHeader(i64),
    NoChangesDetected,
    InvalidDueDate(String),
    CategoriesHeader,

    // === CONFIRMATIONS ===
    ConfirmDeleteTask(String),
    ConfirmDeleteAllTasks(usize),

    // === INTERACTIVE SESSION ===
    SelectAction,
    SelectTaskAction(String),
    MenuAddTask,
    MenuDeleteAll,
    MenuQuit,
    CardView,
    CardEdit,
    CardDelete,
    CardCollapse,
    CardSave,
    CardCancel,

    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    ConfigSaved,

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskCategory,
    NoCategoryOption,
    OtherCategoryOption,
    PromptCustomCategory,
    PromptDatabase,
    PromptSelectCategories,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
