//! 配置管理模块
//!
//! 提供统一的配置读取和管理功能。命令行程序始终使用默认配置，
//! 作为库使用时可以从 TOML 文本或文件加载。

use crate::error::{FormatterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 主配置结构体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日志配置
    pub log: LogSettings,
    /// 排版配置
    pub format: FormatConfig,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 日志输出目录，不设置则只输出到 stderr
    pub log_dir: Option<PathBuf>,
}

/// SQL 排版配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// 每一级括号缩进的空格数
    pub indent_size: usize,
    /// `IN (...)` 列表保持单行的最大值个数，超过则每行一个值
    pub in_list_inline_max: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "warn".to_string(), log_dir: None }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_size: 4, in_list_inline_max: 5 }
    }
}

impl FormatConfig {
    /// 单级缩进字符串
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_size)
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 从字符串加载配置
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        // 验证日志级别
        match self.log.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(FormatterError::config_error(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        if self.format.indent_size == 0 {
            return Err(FormatterError::config_error("indent_size 不能为0"));
        }

        Ok(())
    }

    /// 转换为日志模块使用的配置
    #[cfg(feature = "logging")]
    pub fn log_config(&self) -> Result<crate::logging::LogConfig> {
        let level = self.log.level.parse::<tracing::Level>().map_err(|e| {
            FormatterError::config_error(format!("无效的日志级别: {e}"))
        })?;
        let mut config = crate::logging::LogConfig::new().level(level);
        if let Some(dir) = &self.log.log_dir {
            config = config.log_dir(dir.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        // 测试无效日志级别
        config.log.level = "invalid".to_string();
        assert!(config.validate().is_err());

        // 测试缩进为0
        config.log.level = "info".to_string();
        config.format.indent_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_str("[format]\nin_list_inline_max = 3\n")
            .unwrap();
        assert_eq!(config.format.in_list_inline_max, 3);
        assert_eq!(config.format.indent_size, 4);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed_config: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed_config);
    }

    #[test]
    fn test_indent_unit() {
        let format = FormatConfig { indent_size: 2, ..FormatConfig::default() };
        assert_eq!(format.indent_unit(), "  ");
    }
}
