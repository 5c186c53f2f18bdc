use axum::response::Json;
use chrono::{SecondsFormat, Utc};

use crate::common::response::{HealthResponse, MessageResponse};

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the API",
    })
}

/// 健康检查，时间戳格式如 `2024-01-01T00:00:00.000Z`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
