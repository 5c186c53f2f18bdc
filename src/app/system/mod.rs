//! 系统接口：欢迎页与健康检查

pub mod handler;
