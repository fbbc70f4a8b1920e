use axum::Json;

use crate::dto::CalendarResponse;

/// GET /api/calendar
pub async fn get_calendar() -> Json<CalendarResponse> {
    Json(CalendarResponse {
        calendar: "Calendar content",
    })
}
