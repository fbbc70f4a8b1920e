use axum::Json;

use crate::dto::AnalyticsResponse;

/// GET /api/analytics
pub async fn get_analytics() -> Json<AnalyticsResponse> {
    Json(AnalyticsResponse {
        analytics: "Analytics content",
    })
}
