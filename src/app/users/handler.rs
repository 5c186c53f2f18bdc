//! 用户处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use super::{model::CreateUserRequest, service::UserService};
use crate::common::{
    error::ApiError,
    extract::{JsonBody, JsonPath},
    response::{UserResponse, UsersResponse},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.user_service.list_users(),
    })
}

pub async fn get_user(
    State(state): State<AppState>,
    JsonPath(id): JsonPath<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.find_user(&id)?;
    Ok(Json(UserResponse { user }))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.user_service.create_user(payload)?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}
