use super::protocol::{Command, CommandResponse};
use super::store::KvStore;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Client for a managed Redis-over-HTTP store.
///
/// One HTTP round trip per command. Failures are returned as-is: there is no
/// retry and no client-side timeout.
pub struct RestStore {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestStore {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    async fn execute(&self, command: &Command) -> Result<Option<Value>> {
        let resp = self
            .http_client
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .json(command)
            .send()
            .await
            .context("KV request failed")?;

        let status = resp.status();
        let body: CommandResponse = resp
            .json()
            .await
            .with_context(|| format!("KV returned an unreadable body (status {})", status))?;

        if let Some(error) = body.error {
            anyhow::bail!("KV error (status {}): {}", status, error);
        }
        if !status.is_success() {
            anyhow::bail!("KV request rejected with status {}", status);
        }

        Ok(body.result)
    }
}

#[async_trait]
impl KvStore for RestStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        match self.execute(&Command::get(key)).await? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(decode_stored(text))),
            Some(other) => Ok(Some(other)),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let value_json = serde_json::to_string(&value)?;
        self.execute(&Command::set(key, value_json)).await?;
        tracing::debug!("KV SET {} ok", key);
        Ok(())
    }
}

/// Stored strings hold JSON text; anything that does not parse is kept as a
/// plain string value.
pub(crate) fn decode_stored(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}
