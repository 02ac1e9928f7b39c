use super::handlers::*;
use super::service::PhoneBook;
use crate::storage::SharedStore;

use axum::{
    Extension, Router,
    routing::{get, post},
};

/// Appends a single phone number to a list.
pub const ENDPOINT_ADD: &str = "/add";
/// Appends a batch of phone numbers to a list.
pub const ENDPOINT_BULK_ADD: &str = "/admin/bulk-add";
/// Returns the list stored under `?file=`.
pub const ENDPOINT_GET: &str = "/get";

/// Builds the HTTP surface over the given store.
///
/// Each route answers its own verb plus `OPTIONS`; any other method gets a 405.
pub fn router(store: SharedStore) -> Router {
    let book = PhoneBook::new(store);

    Router::new()
        .route(
            ENDPOINT_ADD,
            post(handle_add)
                .options(handle_preflight_post)
                .fallback(handle_post_method_not_allowed),
        )
        .route(
            ENDPOINT_BULK_ADD,
            post(handle_bulk_add)
                .options(handle_preflight_post)
                .fallback(handle_post_method_not_allowed),
        )
        .route(
            ENDPOINT_GET,
            get(handle_get)
                .options(handle_preflight_get)
                .fallback(handle_get_method_not_allowed),
        )
        .layer(Extension(book))
}
