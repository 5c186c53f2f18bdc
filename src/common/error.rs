//! 统一错误处理模块

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

use super::response::ErrorResponse;

pub const USER_NOT_FOUND: &str = "User not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const MISSING_USER_FIELDS: &str = "Name and email are required";
pub const INTERNAL_ERROR: &str = "Something went wrong!";

/// API 错误类型
///
/// 客户端只会看到固定的错误信息，`Internal` 携带的细节只写入服务端日志。
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::Internal(detail) => {
                error!("请求处理失败: {}", detail);
                INTERNAL_ERROR
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// 未匹配路由的兜底处理器
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND)
}

/// 处理器 panic 时的响应，panic 信息只记录到日志
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else {
        "未知 panic"
    };

    ApiError::Internal(format!("处理器 panic: {}", detail)).into_response()
}
