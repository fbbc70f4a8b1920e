use axum::Json;

use crate::dto::UsersResponse;

/// GET /api/users
///
/// Mock listing until a user store exists.
pub async fn get_users() -> Json<UsersResponse> {
    Json(UsersResponse {
        users: vec!["User1", "User2"],
    })
}
