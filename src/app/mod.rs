//! 应用层：路由装配
//!
//! `build_router` 只构造可路由的服务，不绑定端口，测试可以直接使用。

pub mod system;
pub mod users;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::common::{
    error::{handle_panic, route_not_found},
    middleware::request_logging_middleware,
};
use users::{handler::AppState, service::UserService};

/// 构造完整的路由（含兜底路由和中间件）
///
/// 已知路径上的方法不匹配同样返回 404 `Route not found`，而不是 405。
pub fn build_router() -> Router {
    let state = AppState {
        user_service: UserService::new(),
    };

    let routes = Router::new()
        .route(
            "/",
            get(system::handler::welcome).fallback(route_not_found),
        )
        .route(
            "/health",
            get(system::handler::health_check).fallback(route_not_found),
        )
        .route(
            "/api/users",
            get(users::handler::list_users)
                .post(users::handler::create_user)
                .fallback(route_not_found),
        )
        .route(
            "/api/users/:id",
            get(users::handler::get_user).fallback(route_not_found),
        )
        .fallback(route_not_found)
        .with_state(state);

    with_middleware(routes)
}

/// 为路由加上公共中间件：请求日志与 panic 捕获
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}
