use serde::Serialize;

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct StudySessionsResponse {
    pub sessions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SyllabusResponse {
    pub syllabus: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub calendar: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: &'static str,
}
