use axum::Json;

use crate::dto::SyllabusResponse;

/// GET /api/syllabus
pub async fn get_syllabus() -> Json<SyllabusResponse> {
    Json(SyllabusResponse {
        syllabus: "Syllabus content",
    })
}
