//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use franchise::server::model::app::AppState;
use franchise_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            version: "test".to_string(),
        }
    }
}

/// Reads a response body as JSON.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
