use super::error::PhoneError;

use regex::Regex;
use serde_json::{Number, Value};
use std::sync::OnceLock;

pub const PHONE_LENGTH: usize = 10;

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").expect("valid digits regex"))
}

// `\d` in the regex crate is Unicode-aware, so the ASCII check keeps
// full-width digits out.
fn all_digits(s: &str) -> bool {
    digits_re().is_match(s) && s.bytes().all(|b| b.is_ascii_digit())
}

// Length in UTF-16 code units, the unit browsers and JSON clients count in.
fn text_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// A phone is valid when, once trimmed, it is exactly ten decimal digits.
pub fn is_valid_phone(raw: &str) -> bool {
    let trimmed = raw.trim();
    text_length(trimmed) == PHONE_LENGTH && all_digits(trimmed)
}

/// Validates a single phone for `/add`, returning the trimmed form.
///
/// The length check runs before the digit check so that `"123"` reports the
/// length problem rather than a digit problem.
pub fn check_phone(raw: &str) -> Result<String, PhoneError> {
    let trimmed = raw.trim();
    if text_length(trimmed) != PHONE_LENGTH {
        return Err(PhoneError::WrongLength);
    }
    if !all_digits(trimmed) {
        return Err(PhoneError::NotDigits);
    }
    Ok(trimmed.to_string())
}

/// Textual form of a JSON value, used before validating loosely typed input.
///
/// Follows script-style string conversion: integral floats print without a
/// fraction (`1e9` is `"1000000000"`), arrays join their elements with `,`
/// (null elements print empty) and objects print as `[object Object]`.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_string(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // `Display` for f64 never adds a trailing `.0`.
        Some(f) if f.is_finite() => format!("{}", f),
        _ => n.to_string(),
    }
}

/// Null, `false`, `0` and `""` count as "not provided".
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Extracts the `file` key from a request body.
pub fn require_file(body: &Value) -> Result<String, PhoneError> {
    let file = body.get("file");
    if is_missing(file) {
        return Err(PhoneError::MissingFile);
    }
    match file {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(coerce_to_string(other)),
        None => Err(PhoneError::MissingFile),
    }
}

/// Splits a batch into trimmed valid phones and untouched invalid inputs.
pub fn partition_phones(phones: &[Value]) -> (Vec<String>, Vec<Value>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for phone in phones {
        let text = coerce_to_string(phone);
        if is_valid_phone(&text) {
            valid.push(text.trim().to_string());
        } else {
            invalid.push(phone.clone());
        }
    }

    (valid, invalid)
}
