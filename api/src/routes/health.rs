use axum::Json;

use crate::dto::HealthResponse;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
