// Markdown checklist codec
//
// Serialization is one `- [x] text` / `- [ ] text` line per task. Parsing
// classifies every trimmed line as blank, checklist or freeform.

use crate::task::Task;

/// Classification of one trimmed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// `-`, optional whitespace, `[` + one of ` `/`x`/`X` + `]`, optional
    /// whitespace, then the text (already trimmed, possibly empty)
    Checklist { completed: bool, text: &'a str },
    Freeform(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Line::Blank;
        }
        match parse_checklist(line) {
            Some((completed, text)) => Line::Checklist { completed, text },
            None => Line::Freeform(line),
        }
    }

    /// Convert to a task with a fresh id, or `None` for lines that carry no task
    pub fn into_task(self) -> Option<Task> {
        match self {
            Line::Blank => None,
            Line::Checklist { completed, text } => Task::with_state(text, completed),
            Line::Freeform(text) => Task::with_state(text, false),
        }
    }
}

fn parse_checklist(line: &str) -> Option<(bool, &str)> {
    let rest = line.strip_prefix('-')?.trim_start();
    let rest = rest.strip_prefix('[')?;

    let mut chars = rest.chars();
    let completed = match chars.next()? {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };
    let rest = chars.as_str().strip_prefix(']')?;

    Some((completed, rest.trim()))
}

/// Serialize tasks in list order
pub fn to_markdown(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|t| format!("- [{}] {}", if t.completed { 'x' } else { ' ' }, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a checklist document into fresh tasks
///
/// Accepts `\n` and `\r\n` line endings. Blank lines and checklist markers
/// without text produce nothing; any other non-checklist line becomes an
/// incomplete task verbatim.
pub fn from_markdown(text: &str) -> Vec<Task> {
    text.lines().filter_map(|l| Line::classify(l).into_task()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn task(text: &str, completed: bool) -> Task {
        Task {
            id: TaskId::generate(),
            text: text.to_string(),
            completed,
        }
    }

    fn pairs(tasks: &[Task]) -> Vec<(&str, bool)> {
        tasks.iter().map(|t| (t.text.as_str(), t.completed)).collect()
    }

    #[test]
    fn test_to_markdown_format() {
        let tasks = vec![task("Buy milk", false), task("Walk the dog", true)];
        assert_eq!(to_markdown(&tasks), "- [ ] Buy milk\n- [x] Walk the dog");
    }

    #[test]
    fn test_empty_list_round_trip() {
        assert_eq!(to_markdown(&[]), "");
        assert!(from_markdown("").is_empty());
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(Line::classify("   "), Line::Blank);
        assert_eq!(
            Line::classify("- [ ] A"),
            Line::Checklist {
                completed: false,
                text: "A"
            }
        );
        assert_eq!(
            Line::classify("- [X] C"),
            Line::Checklist {
                completed: true,
                text: "C"
            }
        );
        assert_eq!(
            Line::classify("-[x]tight"),
            Line::Checklist {
                completed: true,
                text: "tight"
            }
        );
        assert_eq!(Line::classify("- [y] nope"), Line::Freeform("- [y] nope"));
        assert_eq!(Line::classify("-- [ ] double"), Line::Freeform("-- [ ] double"));
        assert_eq!(Line::classify("* [ ] star"), Line::Freeform("* [ ] star"));
        assert_eq!(Line::classify("- [] empty box"), Line::Freeform("- [] empty box"));
    }

    #[test]
    fn test_parse_mixed_document() {
        let tasks = from_markdown("- [ ] A\n- [x] B\n\n- [X] C");
        assert_eq!(pairs(&tasks), vec![("A", false), ("B", true), ("C", true)]);
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let tasks = from_markdown("- [x] one\r\n- [ ] two\r\n");
        assert_eq!(pairs(&tasks), vec![("one", true), ("two", false)]);
    }

    #[test]
    fn test_parse_drops_marker_without_text() {
        assert!(from_markdown("- [ ]   ").is_empty());
        assert!(from_markdown("- [x]").is_empty());
    }

    #[test]
    fn test_parse_freeform_line() {
        let tasks = from_markdown("just a note");
        assert_eq!(pairs(&tasks), vec![("just a note", false)]);

        let tasks = from_markdown("  - a dash item  ");
        assert_eq!(pairs(&tasks), vec![("- a dash item", false)]);
    }

    #[test]
    fn test_parse_trims_checklist_text() {
        let tasks = from_markdown("- [ ]    padded text   ");
        assert_eq!(pairs(&tasks), vec![("padded text", false)]);
    }

    #[test]
    fn test_parse_assigns_fresh_ids() {
        let tasks = from_markdown("- [ ] same\n- [ ] same");
        assert_eq!(tasks.len(), 2);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_serialize_then_parse_preserves_content() {
        let tasks = vec![
            task("first", false),
            task("second", true),
            task("- [x] looks like a marker", false),
            task("first", true),
        ];

        let parsed = from_markdown(&to_markdown(&tasks));
        assert_eq!(pairs(&parsed), pairs(&tasks));
    }
}
