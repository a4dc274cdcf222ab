//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。
//! 流水线内部的失败最终都会在 [`crate::process`] 中被转换为可打印的文本，
//! 不会传播到调用方之外。

/// SQL 格式化器的结果类型
pub type Result<T> = std::result::Result<T, FormatterError>;

/// SQL 格式化错误类型
#[derive(Debug, thiserror::Error)]
pub enum FormatterError {
    /// 输入中没有找到任何 SQL 语句
    #[error("Could not find SQL query in debug text")]
    Extraction,

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 配置文件解析错误
    #[error("配置文件解析错误: {0}")]
    Toml(#[from] toml::de::Error),

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),

    /// 其他错误
    #[error("未知错误: {0}")]
    Other(String),
}

impl FormatterError {
    /// 创建一个配置错误
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        tracing::error!("配置错误: {}", message);
        Self::Config(message)
    }

    /// 创建一个其他类型错误
    pub fn other<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        tracing::error!("未知错误: {}", message);
        Self::Other(message)
    }

    /// 检查是否为提取错误
    pub fn is_extraction_error(&self) -> bool {
        matches!(self, FormatterError::Extraction)
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, FormatterError::Io(_))
    }

    /// 检查是否为配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(self, FormatterError::Config(_) | FormatterError::Toml(_))
    }

    /// 检查是否为其他错误
    pub fn is_other_error(&self) -> bool {
        matches!(self, FormatterError::Other(_))
    }
}
