//! 按子句关键字换行、按括号深度缩进

use crate::config::FormatConfig;
use lazy_static::lazy_static;
use regex::Regex;

/// 需要另起一行的子句关键字，按此顺序逐个处理
pub const CLAUSE_KEYWORDS: [&str; 18] = [
    "SELECT",
    "FROM",
    "WHERE",
    "AND",
    "OR",
    "ORDER BY",
    "GROUP BY",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "JOIN",
    "INNER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "FULL JOIN",
    "UNION",
    "INTERSECT",
    "EXCEPT",
];

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref KEYWORD_RES: Vec<(Regex, String)> = CLAUSE_KEYWORDS
        .iter()
        .map(|kw| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw)))
                .unwrap();
            (re, format!("\n{kw}"))
        })
        .collect();
}

/// 把所有空白压缩成单个空格
#[must_use]
pub fn collapse_whitespace(sql: &str) -> String {
    WHITESPACE_RE.replace_all(sql.trim(), " ").into_owned()
}

/// 在每个关键字（整词、大小写不敏感）之前插入换行，关键字统一为大写。
///
/// 后面的关键字作用在前面处理过的结果上，所以 `LEFT JOIN` 会先被
/// `JOIN` 拆开，之后不再匹配 `LEFT JOIN`。
#[must_use]
pub fn break_before_keywords(sql: &str) -> String {
    let mut text = sql.to_string();
    for (re, replacement) in KEYWORD_RES.iter() {
        text = re.replace_all(&text, replacement.as_str()).into_owned();
    }
    text
}

/// 统计一行中的左右括号数
fn paren_counts(line: &str) -> (usize, usize) {
    line.chars().fold((0, 0), |(open, close), c| match c {
        '(' => (open + 1, close),
        ')' => (open, close + 1),
        _ => (open, close),
    })
}

/// 换行并缩进整条 SQL
#[must_use]
pub fn reflow(sql: &str, config: &FormatConfig) -> String {
    let broken = break_before_keywords(&collapse_whitespace(sql));
    let unit = config.indent_unit();
    let mut depth = 0usize;
    let mut lines = Vec::new();

    for line in broken.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with(')') {
            depth = depth.saturating_sub(1);
        }

        lines.push(format!("{}{}", unit.repeat(depth), line));

        let (open, close) = paren_counts(line);
        if open > close {
            depth += open - close;
        } else {
            depth = depth.saturating_sub(close - open);
        }
    }

    tracing::trace!("重排完成, 共 {} 行", lines.len());
    lines.join("\n")
}
