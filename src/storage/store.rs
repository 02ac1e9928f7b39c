use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A string-keyed store of JSON values.
///
/// Implementations only need to offer a plain `get`/`set` pair; callers are
/// responsible for any read-modify-write sequencing.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Store handle shared by every request handler.
pub type SharedStore = Arc<dyn KvStore>;
