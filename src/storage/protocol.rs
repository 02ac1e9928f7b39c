//! REST Store Wire Protocol
//!
//! The remote store accepts Redis commands encoded as JSON arrays, one command
//! per `POST` to the base URL, authenticated with a bearer token.
//!
//! ```text
//! ["GET", "<key>"]           -> {"result": "<json text>" | null}
//! ["SET", "<key>", "<json>"] -> {"result": "OK"}
//! any failure                -> {"error": "<reason>"}
//! ```
//!
//! Values travel as JSON *text*: the store itself only knows about strings.

use serde::{Deserialize, Serialize};

pub const COMMAND_GET: &str = "GET";
pub const COMMAND_SET: &str = "SET";

/// A single command, serialized as a flat JSON array of strings.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Command(pub Vec<String>);

impl Command {
    pub fn get(key: &str) -> Self {
        Self(vec![COMMAND_GET.to_string(), key.to_string()])
    }

    pub fn set(key: &str, value_json: String) -> Self {
        Self(vec![COMMAND_SET.to_string(), key.to_string(), value_json])
    }
}

/// Reply envelope returned for every command.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
