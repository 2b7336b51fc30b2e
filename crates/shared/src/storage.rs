use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Durable string key-value surface.
///
/// Values are opaque text (JSON documents in practice). Implementations must
/// treat a missing key as `Ok(None)`, never as an error.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> crate::Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> crate::Result<()>;
}

/// Process-local storage, used by tests and dry runs.
#[derive(Clone, Default)]
pub struct MemoryStorage(Arc<Mutex<HashMap<String, String>>>);

impl MemoryStorage {
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut entries) = self.0.lock() {
            entries.insert(key.into(), value.into());
        }

        self
    }

    pub fn len(&self) -> usize {
        self.0.lock().map(|entries| entries.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> crate::Result<Option<String>> {
        let entries = self
            .0
            .lock()
            .map_err(|e| crate::Error::Storage(e.to_string()))?;

        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> crate::Result<()> {
        let mut entries = self
            .0
            .lock()
            .map_err(|e| crate::Error::Storage(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get("missing").await.unwrap(), None);

        storage.set("groceryTheme", "\"dark\"").await.unwrap();
        assert_eq!(
            storage.get("groceryTheme").await.unwrap().as_deref(),
            Some("\"dark\"")
        );

        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_storage_with_seeds_entries() {
        let storage = MemoryStorage::default().with("a", "1").with("b", "2");
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("b").await.unwrap().as_deref(), Some("2"));
    }
}
