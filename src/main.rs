use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::path::{Path, PathBuf};
use todostore::{Config, SqliteStorage, TaskFilter, TaskId, TodoStore, transfer};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "TodoStore CLI - Local to-do checklist with markdown import/export")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the store directory (default: platform data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    /// Path to a YAML config file (default: config.yaml in the store directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    Add {
        /// Task text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Toggle a task between active and completed
    Toggle {
        /// Task id
        id: String,
    },

    /// List tasks
    List {
        /// Which tasks to show: all, active or completed
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,
    },

    /// Remove all completed tasks
    ClearCompleted,

    /// Export tasks as a markdown checklist
    Export {
        /// Output file, or - for stdout (default: todos.md)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all tasks with the checklist in a markdown file
    Import {
        /// Markdown or plain-text file
        file: PathBuf,
    },
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("todostore"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    // Setup tracing on stderr so exports to stdout stay clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let store_path = cli.store_path.unwrap_or_else(default_store_path);
    let storage = SqliteStorage::open(&store_path)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(storage.base_path())?,
    };

    let mut store = TodoStore::open(storage, config.storage_key.clone());

    match cli.command {
        Commands::Add { text } => match store.add_task(&text.join(" ")) {
            Some(id) => println!("Added {}", id),
            None => println!("Nothing to add"),
        },
        Commands::Toggle { id } => match store.toggle_task(&TaskId::from(id.clone())) {
            Some(true) => println!("Completed {}", id),
            Some(false) => println!("Reopened {}", id),
            None => println!("No task with id {}", id),
        },
        Commands::List { filter } => print_list(&store, filter),
        Commands::ClearCompleted => {
            let removed = store.clear_completed();
            println!("Removed {} completed task(s)", removed);
        }
        Commands::Export { output } => {
            if store.is_empty() {
                println!("Nothing to export - add at least one task first");
                return Ok(());
            }
            let content = store.to_markdown();
            let output = output.unwrap_or(config.export_file);
            if output == Path::new("-") {
                println!("{}", content);
            } else {
                transfer::write_export(&output, &content)?;
                println!("Exported {} task(s) to {}", store.len(), output.display());
            }
        }
        Commands::Import { file } => {
            if !transfer::is_importable(&file) {
                println!(
                    "Skipping {}: expected one of {}",
                    file.display(),
                    transfer::IMPORT_ACCEPT.join(", ")
                );
                return Ok(());
            }
            if let Some(content) = transfer::read_import(&file) {
                let count = store.load_from_markdown(&content);
                println!("Imported {} task(s) from {}", count, file.display());
            }
        }
    }

    Ok(())
}

fn print_list<S: todostore::KeyValueStore>(store: &TodoStore<S>, filter: TaskFilter) {
    for task in store.filtered(filter) {
        if task.completed {
            println!("{} {} {}", "[x]".green(), task.text.dimmed().strikethrough(), task.id.to_string().dimmed());
        } else {
            println!("{} {} {}", "[ ]".normal(), task.text, task.id.to_string().dimmed());
        }
    }

    let summary = store.summary();
    println!();
    println!("{}  ({})", summary.items_left_label().bold(), filter);
    if summary.completed > 0 {
        println!("{}", format!("{} completed - run clear-completed to remove", summary.completed).dimmed());
    }
}
