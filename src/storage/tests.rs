//! Storage Module Tests
//!
//! ## Test Scopes
//! - **MemoryStore**: get/set semantics, absent keys, overwrites.
//! - **RestStore**: command encoding and reply decoding, exercised against a
//!   mock REST store served from `127.0.0.1:0`.

#[cfg(test)]
mod tests {
    use crate::storage::protocol::CommandResponse;
    use crate::storage::remote::decode_stored;
    use crate::storage::{KvStore, MemoryStore, RestStore};
    use axum::http::{HeaderMap, StatusCode};
    use axum::{Extension, Json, Router, routing::post};
    use dashmap::DashMap;
    use serde_json::{Value, json};
    use std::sync::Arc;

    const TOKEN: &str = "test-token";

    // ============================================================
    // MEMORY STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_get_absent_key() {
        let store = MemoryStore::new();

        let value = store.get("never-written").await.unwrap();
        assert!(value.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_memory_set_then_get() {
        let store = MemoryStore::new();

        store
            .set("f1", json!(["1234567890", "0987654321"]))
            .await
            .unwrap();

        let value = store.get("f1").await.unwrap();
        assert_eq!(value, Some(json!(["1234567890", "0987654321"])));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_overwrite_value() {
        let store = MemoryStore::new();

        store.set("f1", json!(["1111111111"])).await.unwrap();
        store
            .set("f1", json!(["1111111111", "2222222222"]))
            .await
            .unwrap();

        let value = store.get("f1").await.unwrap().unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_keys_are_independent() {
        let store = MemoryStore::new();

        store.set("a", json!(["1111111111"])).await.unwrap();
        store.set("b", json!([])).await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), Some(json!(["1111111111"])));
        assert_eq!(store.get("b").await.unwrap(), Some(json!([])));
        assert!(store.get("c").await.unwrap().is_none());
    }

    // ============================================================
    // REST STORE TESTS
    // ============================================================

    type MockData = Arc<DashMap<String, String>>;

    async fn mock_command(
        Extension(data): Extension<MockData>,
        headers: HeaderMap,
        Json(command): Json<Vec<String>>,
    ) -> (StatusCode, Json<CommandResponse>) {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {}", TOKEN))
            .unwrap_or(false);

        if !authorized {
            return (
                StatusCode::UNAUTHORIZED,
                Json(CommandResponse {
                    result: None,
                    error: Some("Unauthorized".to_string()),
                }),
            );
        }

        match command.as_slice() {
            [cmd, key] if cmd == "GET" => {
                let result = data.get(key).map(|v| Value::String(v.value().clone()));
                (
                    StatusCode::OK,
                    Json(CommandResponse {
                        result: Some(result.unwrap_or(Value::Null)),
                        error: None,
                    }),
                )
            }
            [cmd, key, value] if cmd == "SET" => {
                data.insert(key.clone(), value.clone());
                (
                    StatusCode::OK,
                    Json(CommandResponse {
                        result: Some(json!("OK")),
                        error: None,
                    }),
                )
            }
            _ => (
                StatusCode::BAD_REQUEST,
                Json(CommandResponse {
                    result: None,
                    error: Some("ERR unknown command".to_string()),
                }),
            ),
        }
    }

    async fn spawn_mock_store() -> (String, MockData) {
        let data: MockData = Arc::new(DashMap::new());
        let app = Router::new()
            .route("/", post(mock_command))
            .layer(Extension(data.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/", addr), data)
    }

    #[tokio::test]
    async fn test_rest_get_absent_key() {
        let (url, _data) = spawn_mock_store().await;
        let store = RestStore::new(&url, TOKEN);

        let value = store.get("missing").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_rest_set_stores_json_text() {
        let (url, data) = spawn_mock_store().await;
        let store = RestStore::new(&url, TOKEN);

        store.set("f1", json!(["1234567890"])).await.unwrap();

        let raw = data.get("f1").unwrap().value().clone();
        assert_eq!(raw, r#"["1234567890"]"#);
    }

    #[tokio::test]
    async fn test_rest_set_then_get() {
        let (url, _data) = spawn_mock_store().await;
        let store = RestStore::new(&url, TOKEN);

        store
            .set("f2", json!(["1111111111", "2222222222"]))
            .await
            .unwrap();

        let value = store.get("f2").await.unwrap();
        assert_eq!(value, Some(json!(["1111111111", "2222222222"])));
    }

    #[tokio::test]
    async fn test_rest_error_reply_is_an_error() {
        let (url, _data) = spawn_mock_store().await;
        let store = RestStore::new(&url, "wrong-token");

        let result = store.get("f1").await;
        assert!(result.is_err());

        let message = result.unwrap_err().to_string();
        assert!(message.contains("Unauthorized"), "got: {}", message);
    }

    #[tokio::test]
    async fn test_rest_unreachable_store_is_an_error() {
        // Bind and drop to get a port with nothing listening on it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = RestStore::new(&format!("http://{}", addr), TOKEN);
        assert!(store.set("f1", json!([])).await.is_err());
    }

    #[test]
    fn test_decode_stored_json_and_plain_text() {
        assert_eq!(decode_stored(r#"["1"]"#.to_string()), json!(["1"]));
        assert_eq!(decode_stored("not json".to_string()), json!("not json"));
    }
}
