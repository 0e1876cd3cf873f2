// Task list state container with write-through persistence

use crate::filter::{ListSummary, TaskFilter};
use crate::hydrate::{EmptyCause, Hydration, hydrate};
use crate::markdown;
use crate::storage::KeyValueStore;
use crate::task::{Task, TaskId};
use tracing::{debug, info, warn};

/// Default storage key for the persisted task list
pub const DEFAULT_STORAGE_KEY: &str = "todo_app.todos";

/// Owner of the canonical task list
///
/// Every successful mutation writes the full list back to storage as one JSON
/// array. Storage failures never surface: loads fall back to an empty list
/// and failed writes are logged while the in-memory list stays authoritative.
pub struct TodoStore<S: KeyValueStore> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Hydrate a store from `key` in `storage`
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let hydration = match storage.get(&key) {
            Ok(raw) => hydrate(raw.as_deref()),
            Err(e) => {
                warn!(key = %key, error = ?e, "Failed to read persisted task list, starting empty");
                Hydration::Empty(EmptyCause::Unreadable)
            }
        };

        Self {
            storage,
            key,
            tasks: hydration.into_tasks(),
        }
    }

    /// Hydrate a store from the default key
    pub fn with_default_key(storage: S) -> Self {
        Self::open(storage, DEFAULT_STORAGE_KEY)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filtered(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Number of incomplete tasks
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|t| t.completed)
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary::of(&self.tasks)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a task with the trimmed text
    ///
    /// Blank text is a no-op and returns `None`.
    pub fn add_task(&mut self, raw_text: &str) -> Option<TaskId> {
        let task = Task::new(raw_text)?;
        let id = task.id.clone();

        debug!(id = %id, "Adding task");
        self.tasks.push(task);
        self.persist();

        Some(id)
    }

    /// Flip `completed` on every task with `id`, returning the new value of
    /// the first one
    ///
    /// Hydrated lists may repeat an id; each duplicate flips independently.
    /// Unknown ids are a no-op and return `None`.
    pub fn toggle_task(&mut self, id: &TaskId) -> Option<bool> {
        let mut toggled = None;
        for task in self.tasks.iter_mut().filter(|t| &t.id == id) {
            task.completed = !task.completed;
            if toggled.is_none() {
                toggled = Some(task.completed);
            }
        }
        let completed = toggled?;

        debug!(id = %id, completed, "Toggled task");
        self.persist();

        Some(completed)
    }

    /// Remove completed tasks, returning how many were removed
    ///
    /// Nothing is written when no task was completed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        if removed > 0 {
            debug!(removed, "Cleared completed tasks");
            self.persist();
        }

        removed
    }

    /// Replace the whole list
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        debug!(count = tasks.len(), "Replacing task list");
        self.tasks = tasks;
        self.persist();
    }

    // ========================================================================
    // Markdown
    // ========================================================================

    pub fn to_markdown(&self) -> String {
        markdown::to_markdown(&self.tasks)
    }

    /// Replace the list with the tasks parsed from `text`
    ///
    /// The previous list is discarded, not merged. Returns the number of
    /// tasks loaded.
    pub fn load_from_markdown(&mut self, text: &str) -> usize {
        let tasks = markdown::from_markdown(text);
        let count = tasks.len();

        info!(count, "Loaded tasks from markdown");
        self.replace_all(tasks);

        count
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.tasks) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = ?e, "Failed to serialize task list, skipping write");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &json) {
            warn!(key = %self.key, error = ?e, "Failed to persist task list");
        }
    }
}
