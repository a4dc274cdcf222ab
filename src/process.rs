use crate::config::FormatConfig;
use crate::error::Result;
use crate::format::SqlFormatter;
use crate::query::{decode_params, extract_query, substitute_params, ParamList};

/// 输出横幅的第一行
pub const BANNER_TITLE: &str = "-- Formatted SQL Query:";

/// 输出横幅的分隔线单元，重复 [`BANNER_RULE_REPEAT`] 次
pub const BANNER_RULE_UNIT: &str = "-- =";
pub const BANNER_RULE_REPEAT: usize = 50;

/// 完整流水线：提取 → 解码 → 替换 → 排版。
///
/// 任意一步失败都以 `Err` 返回；需要"永不失败"语义时使用 [`process_debug_query`]。
pub fn try_process_debug_query(text: &str, config: &FormatConfig) -> Result<String> {
    let extracted = extract_query(text)?;
    tracing::trace!("提取到 SQL 模板: {}", extracted.template);

    let params = extracted
        .raw_params
        .as_deref()
        .map_or_else(ParamList::empty, decode_params);
    tracing::debug!(
        "参数解码方式: {:?}, 个数: {}",
        params.strategy,
        params.len()
    );

    let substituted = substitute_params(&extracted.template, &params.values);
    Ok(SqlFormatter::new(config.clone()).format(&substituted))
}

/// 处理一段调试日志文本，始终返回可打印的结果。
///
/// 失败时返回错误说明加上原始输入，而不是把错误传给调用方。
#[must_use]
pub fn process_debug_query(text: &str, config: &FormatConfig) -> String {
    match try_process_debug_query(text, config) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!("处理失败, 原样输出输入文本: {e}");
            format!("Error processing query: {e}\n\nOriginal text:\n{text}")
        }
    }
}

/// 横幅加处理结果，末尾带换行
#[must_use]
pub fn render_report(result: &str) -> String {
    format!(
        "{BANNER_TITLE}\n{}\n{result}\n",
        BANNER_RULE_UNIT.repeat(BANNER_RULE_REPEAT)
    )
}
