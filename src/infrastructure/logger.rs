//! 日志基础设施

use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化日志，输出到 stderr
    ///
    /// 级别由 `RUST_LOG` 控制，未设置时为 `info`。
    pub fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
        {
            eprintln!("日志初始化失败: {}", e);
        }
    }
}
