//! 响应体结构

use serde::Serialize;

use crate::app::users::model::User;

/// `GET /` 的欢迎信息
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// 错误响应，所有错误统一为 `{ "error": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}
