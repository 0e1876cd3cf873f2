//! Demo 01: Basic Usage
//!
//! This demo adds, toggles and clears tasks, then exports the list as a
//! markdown checklist and imports it back into a fresh store.
//!
//! Run with: cargo run --example 01_basic_usage

use eyre::Result;
use todostore::{SqliteStorage, TaskFilter, TodoStore};

fn main() -> Result<()> {
    // Create a temporary directory for this demo
    let temp_dir = tempfile::tempdir()?;
    let store_path = temp_dir.path().to_path_buf();

    println!("TodoStore Basic Usage Demo");
    println!("==========================\n");
    println!("Store path: {}\n", store_path.display());

    let storage = SqliteStorage::open(&store_path)?;
    let mut store = TodoStore::with_default_key(storage);

    println!("1. ADD - Adding tasks...");
    store.add_task("Buy milk");
    let walk = store.add_task("Walk the dog");
    store.add_task("   ");
    store.add_task("Call mom");
    println!("   Tasks in list: {}\n", store.len());

    println!("2. TOGGLE - Completing 'Walk the dog'...");
    if let Some(id) = &walk {
        store.toggle_task(id);
    }
    for task in store.filtered(TaskFilter::Completed) {
        println!("   Completed: {}", task.text);
    }
    println!("   {}\n", store.summary().items_left_label());

    println!("3. EXPORT - Markdown checklist:");
    let markdown = store.to_markdown();
    for line in markdown.lines() {
        println!("   {}", line);
    }
    println!();

    println!("4. CLEAR - Removing completed tasks...");
    let removed = store.clear_completed();
    println!("   Removed: {}, remaining: {}\n", removed, store.len());

    println!("5. IMPORT - Replacing the list from the exported markdown...");
    let count = store.load_from_markdown(&markdown);
    println!("   Loaded {} task(s):", count);
    for task in store.tasks() {
        println!("   - [{}] {}", if task.completed { "x" } else { " " }, task.text);
    }
    println!();

    drop(store);

    println!("6. REOPEN - Hydrating a new store from disk...");
    let store = TodoStore::with_default_key(SqliteStorage::open(&store_path)?);
    println!("   Tasks after reopen: {}\n", store.len());

    println!("Demo complete!");
    Ok(())
}
