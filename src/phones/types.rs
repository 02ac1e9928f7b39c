use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The phone numbers stored under one `file` key, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneList(Vec<String>);

impl PhoneList {
    pub fn contains(&self, phone: &str) -> bool {
        self.0.iter().any(|p| p == phone)
    }

    pub fn push(&mut self, phone: String) {
        self.0.push(phone);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for PhoneList {
    fn from(phones: Vec<String>) -> Self {
        Self(phones)
    }
}

/// Outcome of a bulk insert, before it is shaped into a response.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkAddOutcome {
    pub added: usize,
    pub duplicates: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub success: bool,
    pub message: String,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAddResponse {
    pub success: bool,
    pub message: String,
    pub added: usize,
    pub duplicates: usize,
    pub total: usize,
    pub duplicate_phones: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhonesResponse {
    pub phones: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid: Option<Vec<Value>>,
}
