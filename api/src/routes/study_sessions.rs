use axum::Json;

use crate::dto::StudySessionsResponse;

/// GET /api/study-sessions
pub async fn get_study_sessions() -> Json<StudySessionsResponse> {
    Json(StudySessionsResponse {
        sessions: vec!["Session1", "Session2"],
    })
}
