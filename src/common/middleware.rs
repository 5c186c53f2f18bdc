//! 请求日志中间件

use axum::{
    extract::Request,
    http::header::USER_AGENT,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// 记录每个请求的方法、路径、状态码、耗时和 User-Agent
///
/// 5xx 响应以 warn 级别输出，其它以 info 级别输出。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let response = next.run(req).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(%method, %uri, status = status.as_u16(), latency_ms, ?user_agent, "请求失败");
    } else {
        info!(%method, %uri, status = status.as_u16(), latency_ms, ?user_agent, "请求完成");
    }

    response
}
