//! Health check endpoint.

use api_types::health::Health;
use axum::Json;

/// Constant status payload; never touches the store.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "OK".to_string(),
        message: "ScholarQuest API is running".to_string(),
    })
}
