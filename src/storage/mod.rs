//! Key-Value Storage Module
//!
//! The only place durable state lives. Every phone list is one JSON value
//! stored under its `file` key.
//!
//! ## Core Concepts
//! - **Seam**: `KvStore` is the handle injected into the HTTP layer, so handlers
//!   never reach for a global connection.
//! - **Backends**: `MemoryStore` keeps values in-process (local runs, tests);
//!   `RestStore` talks to a managed Redis-over-HTTP service.
//! - **No locking**: a read followed by a write is not atomic across requests.
//!   Two writers on the same key can lose an update.

pub mod memory;
pub mod protocol;
pub mod remote;
pub mod store;

pub use memory::MemoryStore;
pub use remote::RestStore;
pub use store::{KvStore, SharedStore};

#[cfg(test)]
mod tests;
