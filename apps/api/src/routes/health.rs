use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness/welcome endpoint; static content only.
pub async fn welcome_handler() -> &'static str {
    "Welcome to the CV Analyzer API!"
}

/// POST /test
/// Echoes the request body back; request-inspection scaffolding.
pub async fn test_handler(Json(data): Json<Value>) -> Json<Value> {
    Json(json!({ "message": "Test successful", "data": data }))
}
