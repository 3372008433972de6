use axum::response::Json;
use serde_json::{Value, json};

/// Liveness check for the migration service, reporting the running crate
/// version. Touches no configuration and makes no upstream calls.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
