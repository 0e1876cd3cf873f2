// File import/export helpers

use eyre::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default file name for exported checklists
pub const EXPORT_FILE_NAME: &str = "todos.md";

pub const EXPORT_MIME_TYPE: &str = "text/markdown";

/// File types offered for import
pub const IMPORT_ACCEPT: [&str; 3] = [".md", "text/markdown", "text/plain"];

const IMPORT_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

/// Whether `path` looks like a markdown or plain-text file
pub fn is_importable(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMPORT_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

/// Read the content of a file chosen for import
///
/// A leading UTF-8 byte order mark is dropped. Returns `None` when the file
/// cannot be read; the import is then abandoned.
pub fn read_import(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            info!(file = ?path, bytes = content.len(), "Read import file");
            match content.strip_prefix('\u{feff}') {
                Some(rest) => Some(rest.to_string()),
                None => Some(content),
            }
        }
        Err(e) => {
            warn!(file = ?path, error = ?e, "Failed to read import file, abandoning import");
            None
        }
    }
}

/// Write exported markdown to `path`
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write export file {:?}", path))?;
    info!(file = ?path, bytes = content.len(), "Wrote export file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::from_markdown;
    use tempfile::TempDir;

    #[test]
    fn test_is_importable() {
        assert!(is_importable(Path::new("todos.md")));
        assert!(is_importable(Path::new("notes/List.MD")));
        assert!(is_importable(Path::new("plain.txt")));
        assert!(!is_importable(Path::new("image.png")));
        assert!(!is_importable(Path::new("README")));
    }

    #[test]
    fn test_read_import_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(read_import(&temp.path().join("missing.md")).is_none());
    }

    #[test]
    fn test_read_import_strips_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(EXPORT_FILE_NAME);
        fs::write(&path, "\u{feff}- [x] Buy milk\n- [ ] Walk").unwrap();

        let content = read_import(&path).unwrap();
        let tasks = from_markdown(&content);
        let pairs: Vec<(&str, bool)> = tasks.iter().map(|t| (t.text.as_str(), t.completed)).collect();
        assert_eq!(pairs, vec![("Buy milk", true), ("Walk", false)]);
    }

    #[test]
    fn test_export_then_import() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(EXPORT_FILE_NAME);

        write_export(&path, "- [ ] Buy milk\n- [x] Walk the dog").unwrap();
        assert_eq!(
            read_import(&path).as_deref(),
            Some("- [ ] Buy milk\n- [x] Walk the dog")
        );
    }
}
