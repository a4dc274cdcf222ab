//! 日志初始化和配置模块
//!
//! 这个模块提供了统一的日志初始化功能，使用 tracing 库。
//! 标准输出专门用于打印格式化后的 SQL，所以控制台日志一律写到 stderr；
//! 配置了日志目录时，额外按天滚动写入文件。

use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 日志配置结构体
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 日志文件目录，`None` 表示只输出到控制台
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// 创建新的日志配置，使用默认级别
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置日志级别
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// 设置日志文件目录
    pub fn log_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: Level::WARN, log_dir: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),
}

/// 日志初始化结果
pub type LogResult<T> = Result<T, LogError>;

/// 初始化日志系统
///
/// - 控制台输出到 stderr
/// - 设置了 `log_dir` 时按天滚动写入文件
/// - `RUST_LOG` 环境变量优先于配置中的级别
///
/// 重复初始化不视为错误，后续调用会被安静地忽略。
///
/// # Examples
///
/// ```no_run
/// use debug_sql_formatter::logging::{init_logging, LogConfig};
/// use tracing::Level;
///
/// let config = LogConfig::new().level(Level::DEBUG);
/// init_logging(config).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> LogResult<()> {
    // 创建环境过滤器，默认使用配置的级别
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.level.to_string().to_lowercase())
    });

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(SystemTime)
        .with_target(true)
        .with_ansi(true);

    let mut guard = None;
    let file_layer = match config.log_dir.as_ref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender =
                tracing_appender::rolling::daily(dir, "debug-sql-fmt");
            let (non_blocking, file_guard) =
                tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);
            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_timer(SystemTime)
                    .with_target(true)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    match Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        Ok(()) => {
            // guard 被丢弃后文件写入线程会退出
            if let Some(file_guard) = guard {
                std::mem::forget(file_guard);
            }
            tracing::debug!("日志系统初始化完成, 级别: {}", config.level);
            Ok(())
        }
        // 已经初始化过了，这不是错误
        Err(_) => Ok(()),
    }
}

/// 使用默认配置初始化日志系统（WARN 级别，仅控制台）
pub fn init_default_logging() -> LogResult<()> {
    init_logging(LogConfig::default())
}
