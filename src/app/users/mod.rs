//! 用户接口：`/api/users`

pub mod handler;
pub mod model;
pub mod service;
