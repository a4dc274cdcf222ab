//! 参数数组解码
//!
//! 优先按 JSON 数组解析；失败时退化为按逗号切分、逐个推断类型。
//! 退化路径不处理引号内的逗号，`["a,b"]` 这类无法按 JSON 解析的输入
//! 会被切成两个值。

use crate::query::types::{DecodeStrategy, ParamList, ParameterValue};
use serde_json::Value;

/// 解码 `params:` 之后的原始文本。
///
/// 不是 `[` 开头、`]` 结尾的输入直接返回空序列，不做任何尝试。
#[must_use]
pub fn decode_params(raw: &str) -> ParamList {
    let raw = raw.trim();
    if !(raw.starts_with('[') && raw.ends_with(']')) || raw.len() < 2 {
        tracing::debug!("参数文本不是数组形式，跳过解码: {raw}");
        return ParamList::empty();
    }

    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(values) => {
            tracing::debug!("参数按 JSON 数组解析成功, 共 {} 个", values.len());
            ParamList {
                values: values.into_iter().map(from_json).collect(),
                strategy: DecodeStrategy::Structured,
            }
        }
        Err(e) => {
            tracing::warn!("参数 JSON 解析失败, 退化为逗号切分: {e}");
            let inner = &raw[1..raw.len() - 1];
            ParamList {
                values: inner.split(',').map(parse_token).collect(),
                strategy: DecodeStrategy::NaiveSplit,
            }
        }
    }
}

fn from_json(value: Value) -> ParameterValue {
    match value {
        Value::Null => ParameterValue::Null,
        Value::Bool(b) => ParameterValue::Boolean(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return ParameterValue::Integer(i);
            }
            // arbitrary_precision 下 to_string 返回数字原文
            let text = n.to_string();
            if is_integer_literal(&text) {
                ParameterValue::BigInteger(text)
            } else {
                ParameterValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => ParameterValue::Text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => {
            ParameterValue::Text(nested.to_string())
        }
    }
}

/// 推断单个逗号切分片段的类型：null → 整数 → 浮点数 → 去引号文本 → 原样文本
#[must_use]
pub fn parse_token(token: &str) -> ParameterValue {
    let token = token.trim();

    if token.eq_ignore_ascii_case("null") {
        return ParameterValue::Null;
    }
    if let Ok(i) = token.parse::<i64>() {
        return ParameterValue::Integer(i);
    }
    if is_integer_literal(token) {
        let digits = token.strip_prefix('+').unwrap_or(token);
        return ParameterValue::BigInteger(digits.to_string());
    }
    if let Ok(f) = token.parse::<f64>() {
        return ParameterValue::Float(f);
    }
    match strip_quotes(token) {
        Some(inner) => ParameterValue::Text(inner.to_string()),
        None => ParameterValue::Text(token.to_string()),
    }
}

/// 可选正负号加至少一位数字
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// 去掉首尾成对的单引号或双引号，内部内容不做反转义。
/// 单独一个引号字符视为空字符串。
fn strip_quotes(token: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if token.starts_with(quote) && token.ends_with(quote) {
            return Some(token.get(1..token.len().saturating_sub(1)).unwrap_or(""));
        }
    }
    None
}
