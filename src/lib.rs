//! Phone Registry Service Library
//!
//! Stores and serves lists of ten-digit phone numbers, each list keyed by an
//! opaque "file" identifier and kept in a key-value store.
//! The binary (`main.rs`) wires these modules into an HTTP server.
//!
//! ## Modules
//! - **`config`**: Bind address, store backend and log level from env vars and flags.
//! - **`phones`**: Validation, the read-modify-write logic and the three HTTP endpoints
//!   (`/add`, `/admin/bulk-add`, `/get`).
//! - **`storage`**: The `KvStore` seam with an in-memory backend and a
//!   Redis-over-HTTP backend.

pub mod config;
pub mod phones;
pub mod storage;
