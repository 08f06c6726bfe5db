use super::files::{atomic_write, read_file};
use anyhow::Result;
use std::path::PathBuf;

/// Key-value persistence provided by the host environment
pub trait KeyValueStore {
    /// Raw value stored under `key`, None when the slot is empty
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each slot as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.slot_path(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.slot_path(key), value)
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub slots: std::collections::HashMap<String, String>,
    /// Number of successful writes
    pub writes: usize,
    /// Make every write fail
    pub fail_writes: bool,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("write to {} refused", key);
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert_eq!(store.get("tasks").unwrap(), None);
        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks").unwrap(), Some("[]".to_string()));
        assert!(temp_dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_file_store_slots_are_independent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        store.set("tasks", "[]").unwrap();
        store.set("dailyBudget", "16").unwrap();
        assert_eq!(store.get("tasks").unwrap(), Some("[]".to_string()));
        assert_eq!(store.get("dailyBudget").unwrap(), Some("16".to_string()));
        assert!(temp_dir.path().join("tasks.json").is_file());
    }
}
