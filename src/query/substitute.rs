use crate::query::types::ParameterValue;

/// 位置占位符
pub const PLACEHOLDER: char = '?';

/// 按出现顺序把 `?` 替换为参数的 SQL 字面量。
///
/// 参数多于占位符时多余参数被忽略；占位符多于参数时，
/// 剩余的 `?` 原样保留。
#[must_use]
pub fn substitute_params(template: &str, params: &[ParameterValue]) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut remaining = params.iter();
    let mut out = String::with_capacity(template.len() + params.len() * 8);
    let mut consumed = 0usize;

    for ch in template.chars() {
        if ch == PLACEHOLDER {
            if let Some(value) = remaining.next() {
                out.push_str(&value.to_sql_literal());
                consumed += 1;
                continue;
            }
        }
        out.push(ch);
    }

    tracing::trace!("替换了 {} 个占位符, 共 {} 个参数", consumed, params.len());
    out
}
