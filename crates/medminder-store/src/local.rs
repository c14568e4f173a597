use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{ReminderStore, StoreError};

/// Reminder lines kept in a single UTF-8 text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, op: &'static str, source: std::io::Error) -> StoreError {
        StoreError::Io {
            op,
            path: self.path.clone(),
            source,
        }
    }

    fn append(&self, text: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error("mkdir", e))?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(format!("{text}\n").as_bytes())
            .map_err(|e| self.io_error("append", e))
    }
}

impl ReminderStore for FileStore {
    fn append_line(&self, text: &str) -> Result<(), StoreError> {
        match self.append(text) {
            Ok(()) => {
                debug!(path = %self.path.display(), "appended reminder");
                Ok(())
            }
            Err(e) => {
                warn!("saving reminder failed: {e}");
                Err(e)
            }
        }
    }

    fn read_all_lines(&self) -> Result<Vec<String>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()))
            }
            Err(e) => return Err(self.io_error("read", e)),
        };
        // Hand-edited files may hold invalid UTF-8; keep every line and
        // substitute U+FFFD for the bad bytes.
        let lines: Vec<String> = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect();
        debug!(path = %self.path.display(), count = lines.len(), "read reminders");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(dir: &Path) -> FileStore {
        FileStore::new(dir.join("medicines.txt"))
    }

    #[test]
    fn append_then_read_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());

        store
            .append_line("Aspirin at 02:05 PM, 2 times/day on Monday Wednesday")
            .unwrap();
        let lines = store.read_all_lines().unwrap();
        assert_eq!(
            lines,
            vec!["Aspirin at 02:05 PM, 2 times/day on Monday Wednesday"]
        );
    }

    #[test]
    fn appends_preserve_order_and_terminate_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());

        store.append_line("first").unwrap();
        store.append_line("second").unwrap();
        store.append_line("third").unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "first\nsecond\nthird\n");
        assert_eq!(store.read_all_lines().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn read_missing_returns_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());

        let err = store.read_all_lines().unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn append_creates_missing_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("nested/dir/medicines.txt"));

        store.append_line("Vitamin D").unwrap();
        assert_eq!(store.read_all_lines().unwrap(), vec!["Vitamin D"]);
    }

    #[test]
    fn append_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        // Parent "directory" is a regular file, so nothing can be created under it.
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();
        let store = FileStore::new(blocker.join("medicines.txt"));

        let err = store.append_line("Aspirin").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn reading_twice_is_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        store.append_line("a").unwrap();
        store.append_line("b").unwrap();

        assert_eq!(store.read_all_lines().unwrap(), store.read_all_lines().unwrap());
    }

    #[test]
    fn existing_text_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        std::fs::write(store.path(), "edited by hand\n").unwrap();

        store.append_line("Metformin at 08:00 AM, 1 times/day on Friday").unwrap();
        assert_eq!(
            store.read_all_lines().unwrap(),
            vec!["edited by hand", "Metformin at 08:00 AM, 1 times/day on Friday"]
        );
    }

    #[test]
    fn invalid_utf8_keeps_every_line() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        std::fs::write(
            store.path(),
            b"Aspirin at 02:05 PM, 2 times/day on Monday\nCaf\xe9ine at 08:00 AM, 1 times/day on Friday\n",
        )
        .unwrap();

        let lines = store.read_all_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Aspirin at 02:05 PM, 2 times/day on Monday");
        assert_eq!(lines[1], "Caf\u{FFFD}ine at 08:00 AM, 1 times/day on Friday");
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());
        std::fs::write(store.path(), "one\r\ntwo\r\n").unwrap();

        assert_eq!(store.read_all_lines().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn unicode_content_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = test_store(tmp.path());

        let line = "Paracétamol 日本語 at 09:00 AM, 2 times/day on Sunday";
        store.append_line(line).unwrap();
        assert_eq!(store.read_all_lines().unwrap(), vec![line]);
    }
}
