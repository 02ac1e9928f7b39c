use super::store::KvStore;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

/// In-process store backed by a concurrent map.
///
/// Data lives as long as the process. Used when no remote store is configured
/// and as the store behind the handler tests.
#[derive(Default)]
pub struct MemoryStore {
    data: DashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }
}
