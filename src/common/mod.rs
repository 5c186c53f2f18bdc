//! 公共层：错误处理、响应结构、请求提取与中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
