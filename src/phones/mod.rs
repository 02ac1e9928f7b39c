//! Phone List Module
//!
//! HTTP API for storing ten-digit phone numbers under an opaque `file` key.
//!
//! ## Overview
//! Three independent, stateless endpoints share nothing but the store:
//! - **`POST /add`**: validate one phone and append it unless already present.
//! - **`POST /admin/bulk-add`**: validate a whole batch (all-or-nothing), then
//!   append the new ones with a single write.
//! - **`GET /get?file=`**: return the stored list, or `[]` for an unknown key.
//!
//! ## Submodules
//! - **`error`**: `PhoneError`, the user-facing failure messages and their status codes.
//! - **`handlers`**: Axum handlers, CORS headers, method gating.
//! - **`routes`**: Endpoint paths and router assembly.
//! - **`service`**: `PhoneBook`, the read-modify-write logic over a `KvStore`.
//! - **`types`**: `PhoneList` and the request/response DTOs.
//! - **`validation`**: Phone format checks and loose JSON input handling.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod types;
pub mod validation;

pub use routes::router;
