// Key-value persistence backends

use eyre::{Context, Result, eyre};
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CURRENT_VERSION: u32 = 1;

/// Scoped string key-value storage
///
/// The task store reads one key at startup and writes it after each mutation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// SQLite-backed storage in a `.todostore` directory
pub struct SqliteStorage {
    base_path: PathBuf,
    db: Connection,
}

impl SqliteStorage {
    /// Open or create storage at the given path
    ///
    /// The database lives in a `.todostore` subdirectory of the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_path = path.as_ref().join(".todostore");

        fs::create_dir_all(&base_path).context("Failed to create store directory")?;

        let db_path = base_path.join("todostore.db");
        let db = Connection::open(&db_path).context("Failed to open SQLite database")?;

        let storage = Self { base_path, db };
        storage.create_schema()?;
        storage.create_gitignore()?;
        storage.check_version()?;

        Ok(storage)
    }

    /// Get the base path of this storage
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn create_schema(&self) -> Result<()> {
        debug!("Creating database schema");

        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    fn create_gitignore(&self) -> Result<()> {
        let gitignore_path = self.base_path.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(
                gitignore_path,
                "todostore.db\ntodostore.db-shm\ntodostore.db-wal\n",
            )?;
        }
        Ok(())
    }

    /// Write `.version` for a fresh store, or refuse a store laid out by a newer release
    fn check_version(&self) -> Result<()> {
        let version_path = self.base_path.join(".version");
        if !version_path.exists() {
            fs::write(version_path, CURRENT_VERSION.to_string())?;
            return Ok(());
        }

        let content = fs::read_to_string(&version_path).context("Failed to read store version")?;
        let version: u32 = content
            .trim()
            .parse()
            .map_err(|_| eyre!("Invalid store version: {:?}", content.trim()))?;

        if version > CURRENT_VERSION {
            return Err(eyre!(
                "Store version {} is newer than supported version {}",
                version,
                CURRENT_VERSION
            ));
        }

        debug!(version, "Store version ok");
        Ok(())
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(eyre!("Storage key cannot be empty or whitespace-only"));
        }
        if key.len() > 256 {
            return Err(eyre!("Storage key too long: {} chars (max 256)", key.len()));
        }
        Ok(())
    }
}

impl KeyValueStore for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::validate_key(key)?;

        self.db
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()
            .context("Failed to read key from database")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::validate_key(key)?;

        self.db
            .execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![key, value, now_ms()],
            )
            .context("Failed to write key to database")?;

        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }
}

// Helper function for timestamps
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
