//! 调试日志解析模块
//!
//! 负责流水线的前半段：提取 SQL 模板、解码参数数组、替换占位符。

pub mod extract;
pub mod params;
pub mod substitute;
pub mod types;

// 重新导出核心类型和函数
pub use extract::extract_query;
pub use params::decode_params;
pub use substitute::substitute_params;
pub use types::{DecodeStrategy, ExtractedQuery, ParamList, ParameterValue};
