// TodoStore - Local to-do checklist with markdown import/export

pub mod config;
pub mod filter;
pub mod hydrate;
pub mod markdown;
pub mod storage;
pub mod store;
pub mod task;
pub mod transfer;

// Re-export main types for convenience
pub use config::Config;
pub use filter::{ListSummary, TaskFilter};
pub use hydrate::{EmptyCause, Hydration};
pub use storage::{KeyValueStore, MemoryStorage, SqliteStorage};
pub use store::{DEFAULT_STORAGE_KEY, TodoStore};
pub use task::{Task, TaskId};
