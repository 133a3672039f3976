//! User profile endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::user::UserProfile};

/// Get a user's public profile
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.services.auth.profile(id).await?;
    Ok(Json(profile))
}
