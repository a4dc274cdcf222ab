//! 从调试日志文本中定位 SQL 语句行和参数行
//!
//! 单次正向扫描，两个可空的结果槽位，后出现的匹配覆盖先出现的。

use crate::error::{FormatterError, Result};
use crate::query::types::ExtractedQuery;

/// 识别 SQL 语句行的关键字（大小写不敏感的子串匹配）
pub const STATEMENT_KEYWORDS: [&str; 4] = ["SELECT", "INSERT", "UPDATE", "DELETE"];

/// 日志前缀与 SQL 之间的分隔标记
pub const LDB_MARKER: &str = "] LDB:";

/// 参数行前缀
pub const PARAMS_PREFIX: &str = "params:";

/// 判断一行是否包含 SQL 语句关键字
#[must_use]
pub fn is_statement_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    STATEMENT_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

/// 去掉 `[时间戳] LDB:` 一类的日志前缀，没有标记时原样返回
#[must_use]
pub fn strip_log_prefix(line: &str) -> &str {
    match line.split_once(LDB_MARKER) {
        Some((_, sql)) => sql.trim(),
        None => line,
    }
}

/// 提取 SQL 模板和原始参数文本。
///
/// 找不到 SQL 语句时返回 [`FormatterError::Extraction`]；
/// 缺少 `params:` 行不是错误。
pub fn extract_query(text: &str) -> Result<ExtractedQuery> {
    let mut template: Option<&str> = None;
    let mut raw_params: Option<&str> = None;

    for (idx, line) in text.trim().split('\n').enumerate() {
        let line = line.trim();
        if is_statement_line(line) {
            tracing::trace!("行{} 识别为 SQL 语句行", idx + 1);
            template = Some(strip_log_prefix(line));
        } else if let Some(rest) = line.strip_prefix(PARAMS_PREFIX) {
            tracing::trace!("行{} 识别为参数行", idx + 1);
            raw_params = Some(rest.trim());
        }
    }

    match template {
        Some(sql) if !sql.is_empty() => Ok(ExtractedQuery {
            template: sql.to_string(),
            raw_params: raw_params.map(str::to_string),
        }),
        _ => {
            tracing::warn!("输入中没有找到 SQL 语句");
            Err(FormatterError::Extraction)
        }
    }
}
