//! Current user handler.

use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::extractors::CurrentUser;
use crate::service::Claims;

/// Claims of the signed-in user, `null` when signed out.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    #[serde(rename = "currentUser")]
    pub current_user: Option<Claims>,
}

/// Report who the session belongs to
#[utoipa::path(
    get,
    path = "/api/users/currentuser",
    tag = "Authentication",
    security((), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Current user claims or null", body = CurrentUserResponse)
    )
)]
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        current_user: claims,
    })
}
