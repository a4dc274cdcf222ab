//! `IN (...)` 值列表的排版
//!
//! 匹配不平衡括号：列表内部出现 `(` 或 `)` 时捕获范围会出错，
//! 例如 `IN (f(1), 2)` 只会捕获到 `f(1`。这类输入输出尽力而为。

use crate::config::FormatConfig;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref IN_LIST_RE: Regex = Regex::new(r"(?i)\bIN\s*\(([^)]+)\)").unwrap();
}

/// 渲染单个 `IN` 列表：值个数不超过 `in_list_inline_max` 时保持单行，
/// 否则每行一个值，值缩进两级、右括号缩进一级。
fn render_in_list(content: &str, config: &FormatConfig) -> String {
    let values: Vec<&str> = content.split(',').map(str::trim).collect();

    if values.len() > config.in_list_inline_max {
        let unit = config.indent_unit();
        let value_indent = unit.repeat(2);
        let separator = format!(",\n{value_indent}");
        format!("IN (\n{value_indent}{}\n{unit})", values.join(&separator))
    } else {
        format!("IN ({})", values.join(", "))
    }
}

/// 重新排版文本中所有的 `IN (...)` 列表
#[must_use]
pub fn format_in_clauses(sql: &str, config: &FormatConfig) -> String {
    IN_LIST_RE
        .replace_all(sql, |caps: &Captures| render_in_list(&caps[1], config))
        .into_owned()
}
