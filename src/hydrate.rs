// Tolerant decoding of the persisted task list

use crate::task::{Task, TaskId};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Why hydration produced no list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCause {
    /// Key not present in storage
    Absent,
    /// Storage read failed
    Unreadable,
    InvalidJson,
    /// Valid JSON, but not an array
    NotAnArray,
}

/// Outcome of decoding the persisted value
#[derive(Debug, Clone, PartialEq)]
pub enum Hydration {
    Loaded { tasks: Vec<Task>, dropped: usize },
    Empty(EmptyCause),
}

impl Hydration {
    /// Collapse every empty cause into an empty list
    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            Hydration::Loaded { tasks, .. } => tasks,
            Hydration::Empty(_) => Vec::new(),
        }
    }
}

/// Decode a persisted JSON array of `{id, text, completed}` objects
///
/// Elements that are not objects, lack one of the three fields, or carry
/// blank text are dropped one by one; the rest of the array still loads.
pub fn hydrate(raw: Option<&str>) -> Hydration {
    let Some(raw) = raw else {
        debug!("No persisted task list, starting empty");
        return Hydration::Empty(EmptyCause::Absent);
    };

    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = ?e, "Persisted task list is not valid JSON, starting empty");
            return Hydration::Empty(EmptyCause::InvalidJson);
        }
    };

    let Value::Array(items) = value else {
        warn!("Persisted task list is not an array, starting empty");
        return Hydration::Empty(EmptyCause::NotAnArray);
    };

    let mut tasks = Vec::with_capacity(items.len());
    let mut dropped = 0;

    for (index, item) in items.iter().enumerate() {
        match decode_task(item) {
            Some(task) => tasks.push(task),
            None => {
                warn!(index, "Dropping malformed task entry");
                dropped += 1;
            }
        }
    }

    info!(count = tasks.len(), dropped, "Hydrated task list");
    Hydration::Loaded { tasks, dropped }
}

fn decode_task(item: &Value) -> Option<Task> {
    let obj = item.as_object()?;
    let id = coerce_string(obj.get("id")?);
    let text = coerce_string(obj.get("text")?);
    let completed = truthy(obj.get("completed")?);

    if text.trim().is_empty() {
        return None;
    }

    Some(Task {
        id: TaskId::from(id),
        text,
        completed,
    })
}

// Same strings a browser's `String(value)` yields for JSON values
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => coerce_number(n),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => coerce_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn coerce_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // f64 Display already omits a trailing `.0`; only -0 needs folding
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
