use super::error::PhoneError;
use super::service::PhoneBook;
use super::types::{
    AddResponse, BulkAddOutcome, BulkAddResponse, ErrorResponse, PhonesResponse,
};
use super::validation::{check_phone, coerce_to_string, is_missing, partition_phones, require_file};

use axum::{
    Extension, Json,
    body::Bytes,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

pub const POST_METHODS: &str = "POST, OPTIONS";
pub const GET_METHODS: &str = "GET, OPTIONS";

fn cors_headers(methods: &'static str) -> [(header::HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    ]
}

fn respond<T: Serialize>(methods: &'static str, status: StatusCode, body: T) -> Response {
    (status, cors_headers(methods), Json(body)).into_response()
}

// Only store failures are logged; client errors are part of normal traffic.
fn log_failure(route: &str, err: &PhoneError) {
    if let PhoneError::Store(cause) = err {
        tracing::error!("Error in {}: {:#}", route, cause);
    }
}

fn error_response(methods: &'static str, route: &str, err: PhoneError) -> Response {
    log_failure(route, &err);

    let status = err.status();
    let message = err.to_string();

    let invalid = match err {
        PhoneError::InvalidPhones(invalid) => Some(invalid),
        _ => None,
    };

    respond(
        methods,
        status,
        ErrorResponse {
            success: false,
            message,
            invalid,
        },
    )
}

// An absent or unparseable body behaves like `{}`.
fn parse_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Default::default()))
}

pub async fn handle_preflight_post() -> Response {
    (StatusCode::OK, cors_headers(POST_METHODS)).into_response()
}

pub async fn handle_preflight_get() -> Response {
    (StatusCode::OK, cors_headers(GET_METHODS)).into_response()
}

fn method_not_allowed(methods: &'static str) -> Response {
    respond(
        methods,
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorResponse {
            success: false,
            message: "Method not allowed".to_string(),
            invalid: None,
        },
    )
}

pub async fn handle_post_method_not_allowed() -> Response {
    method_not_allowed(POST_METHODS)
}

pub async fn handle_get_method_not_allowed() -> Response {
    method_not_allowed(GET_METHODS)
}

pub async fn handle_add(Extension(book): Extension<PhoneBook>, body: Bytes) -> Response {
    let body = parse_body(&body);

    match add_phone(&book, &body).await {
        Ok(total) => respond(
            POST_METHODS,
            StatusCode::OK,
            AddResponse {
                success: true,
                message: "Phone number added successfully".to_string(),
                total,
            },
        ),
        Err(e) => error_response(POST_METHODS, "add", e),
    }
}

async fn add_phone(book: &PhoneBook, body: &Value) -> Result<usize, PhoneError> {
    let file = require_file(body)?;

    let phone = match body.get("phone") {
        Some(phone) if !is_missing(Some(phone)) => coerce_to_string(phone),
        _ => return Err(PhoneError::MissingPhone),
    };
    let phone = check_phone(&phone)?;

    book.add(&file, phone).await
}

pub async fn handle_bulk_add(Extension(book): Extension<PhoneBook>, body: Bytes) -> Response {
    let body = parse_body(&body);

    match bulk_add_phones(&book, &body).await {
        Ok(outcome) => respond(
            POST_METHODS,
            StatusCode::OK,
            BulkAddResponse {
                success: true,
                message: "Bulk add completed".to_string(),
                added: outcome.added,
                duplicates: outcome.duplicates.len(),
                total: outcome.total,
                duplicate_phones: outcome.duplicates,
            },
        ),
        Err(e) => error_response(POST_METHODS, "bulk-add", e),
    }
}

async fn bulk_add_phones(
    book: &PhoneBook,
    body: &Value,
) -> Result<BulkAddOutcome, PhoneError> {
    let file = require_file(body)?;

    let phones = match body.get("phones") {
        Some(Value::Array(phones)) => phones,
        _ => return Err(PhoneError::PhonesNotArray),
    };
    if phones.is_empty() {
        return Err(PhoneError::EmptyPhones);
    }

    let (valid, invalid) = partition_phones(phones);
    if !invalid.is_empty() {
        return Err(PhoneError::InvalidPhones(invalid));
    }

    book.bulk_add(&file, valid).await
}

// A repeated parameter resolves to its first value.
fn first_param(pairs: Vec<(String, String)>, name: &str) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

pub async fn handle_get(
    Extension(book): Extension<PhoneBook>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let file = query.and_then(|Query(pairs)| first_param(pairs, "file"));
    let file = match file {
        Some(file) if !file.is_empty() => file,
        _ => return error_response(GET_METHODS, "get", PhoneError::MissingFile),
    };

    match book.list(&file).await {
        Ok(list) => {
            tracing::info!(
                "GET request for file: {}, Total phones: {}",
                file,
                list.len()
            );
            respond(
                GET_METHODS,
                StatusCode::OK,
                PhonesResponse {
                    phones: list.into_inner(),
                },
            )
        }
        Err(e) => {
            log_failure("get", &e);
            respond(
                GET_METHODS,
                StatusCode::INTERNAL_SERVER_ERROR,
                PhonesResponse { phones: Vec::new() },
            )
        }
    }
}
