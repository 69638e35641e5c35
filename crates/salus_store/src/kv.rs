//! File-backed key-value store, one JSON document per key.
//!
//! The desktop stand-in for the browser's localStorage: a handful of fixed
//! keys under one directory, each holding a serialized value. Writes go
//! through a temp file and rename so a key is replaced in a single step.
//! All operations are synchronous; callers run in a single-path context.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed storage keys shared across sessions. No versioning or migration.
pub mod keys {
    /// Serialized plan history, the whole sequence as one unit.
    pub const PLANS: &str = "plans";
    /// Opaque generative-API credential.
    pub const CREDENTIAL: &str = "credential";
    /// User wellness profile from the onboarding flow.
    pub const PROFILE: &str = "profile";
}

#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open (and create if needed) a store rooted at the given directory.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory: {}", root.display()))?;
        Ok(Self { root })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read and deserialize the value under `key`.
    ///
    /// `Ok(None)` when the key has never been written; `Err` when the stored
    /// data exists but cannot be read or parsed.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path(key);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read key '{key}'"));
            }
        };
        let value = serde_json::from_str(&content)
            .with_context(|| format!("Stored data under key '{key}' is not valid"))?;
        Ok(Some(value))
    }

    /// Serialize and persist `value` under `key` in a single replace.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize value for key '{key}'"))?;
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("Failed to write key '{key}'"))?;
        fs::rename(&tmp, &path).with_context(|| format!("Failed to commit key '{key}'"))?;
        Ok(())
    }

    /// Remove the value under `key`. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove key '{key}'")),
        }
    }

    /// Raw path of a key's backing file (test helper).
    #[cfg(test)]
    pub(crate) fn file_for(&self, key: &str) -> PathBuf {
        self.path(key)
    }
}

/// Convenience for opening a store at a config-provided directory.
pub fn open_at(dir: &Path) -> Result<KvStore> {
    KvStore::open(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        (dir, kv)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_dir, kv) = store();
        let got: Option<Vec<String>> = kv.get("nothing").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_set_then_get_roundtrips() {
        let (_dir, kv) = store();
        kv.set("words", &vec!["a".to_string(), "b".to_string()]).unwrap();
        let got: Option<Vec<String>> = kv.get("words").unwrap();
        assert_eq!(got.unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let (_dir, kv) = store();
        kv.set("n", &1u32).unwrap();
        kv.set("n", &2u32).unwrap();
        assert_eq!(kv.get::<u32>("n").unwrap(), Some(2));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, kv) = store();
        kv.set("gone", &true).unwrap();
        kv.remove("gone").unwrap();
        kv.remove("gone").unwrap();
        assert_eq!(kv.get::<bool>("gone").unwrap(), None);
    }

    #[test]
    fn test_corrupt_data_is_an_error_not_a_panic() {
        let (_dir, kv) = store();
        std::fs::write(kv.file_for("bad"), "{not json").unwrap();
        assert!(kv.get::<Vec<String>>("bad").is_err());
    }
}
