use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Every way a phone request can fail.
///
/// The `Display` text is the exact `message` returned to the caller.
#[derive(Error, Debug)]
pub enum PhoneError {
    #[error("File parameter is required")]
    MissingFile,

    #[error("Phone number is required")]
    MissingPhone,

    #[error("Phone number must be 10 digits")]
    WrongLength,

    #[error("Phone number must contain only digits")]
    NotDigits,

    #[error("Phone number already exists")]
    AlreadyExists,

    #[error("Phones must be an array")]
    PhonesNotArray,

    #[error("Phones array cannot be empty")]
    EmptyPhones,

    /// Carries the rejected inputs exactly as they were sent.
    #[error("Some phone numbers are invalid")]
    InvalidPhones(Vec<Value>),

    /// Store or decoding failure. The cause is logged, never returned.
    #[error("Internal server error")]
    Store(#[from] anyhow::Error),
}

impl PhoneError {
    pub fn status(&self) -> StatusCode {
        match self {
            PhoneError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
