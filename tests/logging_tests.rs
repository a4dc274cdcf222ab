#![cfg(feature = "logging")]

use debug_sql_formatter::config::Config;
use debug_sql_formatter::logging::{init_default_logging, init_logging, LogConfig};
use tempfile::TempDir;
use tracing::Level;

/// 测试默认日志初始化
#[test]
fn test_init_default_logging() {
    assert!(init_default_logging().is_ok());
}

/// 重复初始化不是错误
#[test]
fn test_init_logging_twice() {
    assert!(init_logging(LogConfig::new().level(Level::DEBUG)).is_ok());
    assert!(init_logging(LogConfig::new().level(Level::ERROR)).is_ok());
}

/// 配置了目录时会创建日志目录
#[test]
fn test_log_dir_created() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("nested").join("logs");
    assert!(init_logging(LogConfig::new().log_dir(&dir)).is_ok());
    assert!(dir.is_dir());
}

/// 从主配置转换日志配置
#[test]
fn test_log_config_from_settings() {
    let config = Config::from_str("[log]\nlevel = \"info\"\nlog_dir = \"out/logs\"\n").unwrap();
    let log_config = config.log_config().unwrap();
    assert_eq!(log_config.level, Level::INFO);
    assert_eq!(log_config.log_dir.as_deref(), Some(std::path::Path::new("out/logs")));
}
