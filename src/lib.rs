//! # users-api
//!
//! 基于 axum 的极简 JSON 用户接口：
//! - `GET /` 欢迎信息
//! - `GET /health` 健康检查
//! - `GET /api/users`、`GET /api/users/:id`、`POST /api/users`
//! - 未匹配路由返回 404，处理器内部错误返回 500
//!
//! 作为库使用时不会绑定端口，通过 [`build_router`] 获取路由。

pub mod app;
pub mod common;
pub mod infrastructure;

pub use app::{build_router, with_middleware};
pub use common::error::ApiError;
