//! 服务配置
//!
//! 唯一的配置来源是环境变量 `PORT`，没有配置文件。

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

/// 未设置 `PORT` 或其为空时使用的端口
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("无效的 PORT: {0:?}")]
    InvalidPort(String),
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// 从进程环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self { port })
    }

    /// 监听所有网卡
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
