//! # Task Persistence
//!
//! Save/load the task list to one fixed JSON file (default
//! `~/.tuido/tasks.json`).
//!
//! The stored value is a bare JSON array of strings, e.g.
//! `["Buy milk","Call Sam"]`. Loading is deliberately forgiving: a missing
//! file or unparseable content degrades to an empty list (logged, not
//! surfaced), and the file is left untouched until the next save. Saving
//! replaces the whole value every time (no merge, no diff) and goes
//! through atomic rename (write `.tmp`, then `rename()`) so a crash never
//! leaves a half-written list behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::task::TaskList;

/// File-backed store for the ordered task texts. One fixed path per run.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store location: `~/.tuido/tasks.json`.
    ///
    /// Falls back to a relative `tasks.json` when no home directory can be
    /// determined, so the session still starts (with a diagnostic) on
    /// stripped-down environments.
    pub fn default_path() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".tuido").join("tasks.json"),
            None => {
                warn!("Could not determine home directory, storing tasks in ./tasks.json");
                PathBuf::from("tasks.json")
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored task texts.
    ///
    /// Returns an empty list when the file is absent or its content is not
    /// a JSON array of strings. Never writes.
    pub fn load(&self) -> Vec<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No task file at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(texts) => {
                debug!(
                    "Loaded {} task(s) from {}",
                    texts.len(),
                    self.path.display()
                );
                texts
            }
            Err(e) => {
                warn!(
                    "Task file {} is not a JSON array of strings ({}), treating as empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Replace the stored value with the full current list.
    ///
    /// Whole-file overwrite, atomic via temp + rename. Errors propagate to
    /// the caller; there is no retry and no fallback storage.
    pub fn save(&self, tasks: &TaskList) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(tasks)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_never_creates_the_file() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.load();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = TaskList::new();
        tasks.add("Buy milk");
        tasks.add("Call Sam");
        store.save(&tasks).unwrap();
        assert_eq!(store.load(), vec!["Buy milk", "Call Sam"]);
    }

    #[test]
    fn test_save_writes_exact_json_array_layout() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = TaskList::new();
        tasks.add("Buy milk");
        tasks.add("Call Sam");
        store.save(&tasks).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"["Buy milk","Call Sam"]"#);
    }

    #[test]
    fn test_save_fully_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let mut tasks = TaskList::new();
        tasks.add("a");
        tasks.add("b");
        tasks.add("c");
        store.save(&tasks).unwrap();

        tasks.remove(0);
        tasks.remove(0);
        store.save(&tasks).unwrap();
        assert_eq!(store.load(), vec!["c"]);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&TaskList::new()).unwrap();
        assert!(!dir.path().join("tasks.tmp").exists());
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("nested").join("tasks.json"));
        store.save(&TaskList::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_malformed_content_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not-json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_non_array_json_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"tasks":["a"]}"#).unwrap();
        assert!(store.load().is_empty());
        fs::write(store.path(), "[1,2,3]").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_leaves_malformed_file_untouched() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not-json").unwrap();
        store.load();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not-json");
    }

    #[test]
    fn test_save_error_propagates() {
        let dir = tempdir().unwrap();
        // A regular file where the store directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "in the way").unwrap();
        let store = TaskStore::new(blocker.join("tasks.json"));

        let mut tasks = TaskList::new();
        tasks.add("a");
        assert!(store.save(&tasks).is_err());
    }

    #[test]
    fn test_failed_save_leaves_previous_store_intact() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"["existing"]"#).unwrap();
        // A directory squatting on the temp path fails the write step
        // before the rename.
        fs::create_dir(dir.path().join("tasks.tmp")).unwrap();

        let mut tasks = TaskList::new();
        tasks.add("replacement");
        assert!(store.save(&tasks).is_err());
        assert_eq!(store.load(), vec!["existing"]);
    }

    #[test]
    fn test_save_of_loaded_value_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"["Buy milk","Call Sam"]"#).unwrap();

        let reloaded = TaskList::from_texts(store.load());
        store.save(&reloaded).unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            r#"["Buy milk","Call Sam"]"#
        );
    }
}
