// Task entity and id generation

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier
///
/// Generated ids are UUID v7 strings. Ids hydrated from storage are kept
/// verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh id. Collisions are not checked; uniqueness rests on
    /// the generator's timestamp, counter and random bits.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a task with a fresh id.
    ///
    /// Returns `None` when `text` is blank after trimming.
    pub fn new(text: &str) -> Option<Self> {
        Self::with_state(text, false)
    }

    pub(crate) fn with_state(text: &str, completed: bool) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: TaskId::generate(),
            text: text.to_string(),
            completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_trims_text() {
        let task = Task::new("  Buy milk \t").unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_new_rejects_blank_text() {
        assert!(Task::new("").is_none());
        assert!(Task::new("   ").is_none());
        assert!(Task::new("\n\t").is_none());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids: HashSet<TaskId> = (0..1000).map(|_| TaskId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_task_serialization_layout() {
        let task = Task {
            id: TaskId::from("1"),
            text: "Walk the dog".to_string(),
            completed: true,
        };

        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":"1","text":"Walk the dog","completed":true}"#);
    }
}
