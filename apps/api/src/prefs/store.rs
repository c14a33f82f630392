//! Key-value preference persistence.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt preference file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<PrefsError> for AppError {
    fn from(e: PrefsError) -> Self {
        AppError::Preferences(e.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// String key-value store for user preferences.
///
/// Carried in `AppState` as `Arc<dyn PreferenceStore>`.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    /// Atomic read-modify-write of one key. Returns the value written.
    ///
    /// No other `update` on the same store interleaves between the read and the write.
    async fn update(
        &self,
        key: &str,
        f: &(dyn for<'a> Fn(Option<&'a str>) -> String + Send + Sync),
    ) -> Result<String, PrefsError>;
}

// ────────────────────────────────────────────────────────────────────────────
// JsonFileStore (default implementation)
// ────────────────────────────────────────────────────────────────────────────

/// Flat JSON object on disk. A missing file reads as empty.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn io_err(&self, source: std::io::Error) -> PrefsError {
        PrefsError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        match tokio::fs::read(&self.path).await {
            Ok(raw) if raw.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_slice(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(self.io_err(e)),
        }
    }

    async fn save(&self, values: &BTreeMap<String, String>) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_err(e))?;
        }
        // Readers never see a half-written file: write aside, then rename over.
        let body = serde_json::to_vec_pretty(values)?;
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, body)
            .await
            .map_err(|e| self.io_err(e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| self.io_err(e))
    }
}

#[async_trait]
impl PreferenceStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.load().await?.remove(key))
    }

    async fn update(
        &self,
        key: &str,
        f: &(dyn for<'a> Fn(Option<&'a str>) -> String + Send + Sync),
    ) -> Result<String, PrefsError> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.load().await?;
        let value = f(values.get(key).map(String::as_str));
        values.insert(key.to_string(), value.clone());
        self.save(&values).await?;
        debug!(key, value = %value, path = %self.path.display(), "Preference saved");
        Ok(value)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryStore (non-persistent, for tests)
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

#[cfg(test)]
#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn update(
        &self,
        key: &str,
        f: &(dyn for<'a> Fn(Option<&'a str>) -> String + Send + Sync),
    ) -> Result<String, PrefsError> {
        let mut values = self.values.lock().await;
        let value = f(values.get(key).map(String::as_str));
        values.insert(key.to_string(), value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn put(store: &dyn PreferenceStore, key: &str, value: &str) {
        store.update(key, &|_| value.to_string()).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_creates_parent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/prefs.json");
        put(&JsonFileStore::new(&path), "theme", "light").await;

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn test_update_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));
        put(&store, "a", "1").await;
        put(&store, "b", "2").await;
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = JsonFileStore::new(&path).get("theme").await.unwrap_err();
        assert!(matches!(err, PrefsError::Parse(_)));
    }

    #[tokio::test]
    async fn test_update_sees_current_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));
        let first = store
            .update("count", &|v| format!("{}x", v.unwrap_or("")))
            .await
            .unwrap();
        let second = store
            .update("count", &|v| format!("{}x", v.unwrap_or("")))
            .await
            .unwrap();
        assert_eq!(first, "x");
        assert_eq!(second, "xx");
        assert_eq!(store.get("count").await.unwrap().as_deref(), Some("xx"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(JsonFileStore::new(dir.path().join("prefs.json")));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .update("count", &|v| format!("{}x", v.unwrap_or("")))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.get("count").await.unwrap().map(|v| v.len()), Some(16));
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.get("theme").await.unwrap(), None);
        put(&store, "theme", "dark").await;
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    }
}
