//! SQL 排版模块
//!
//! 基于关键字和括号深度的启发式排版，不解析语法树。

pub mod in_clause;
pub mod reflow;

pub use in_clause::format_in_clauses;
pub use reflow::{CLAUSE_KEYWORDS, reflow};

use crate::config::FormatConfig;

/// 排版器：先按关键字换行缩进，再展开 `IN` 列表
#[derive(Debug, Clone, Default)]
pub struct SqlFormatter {
    config: FormatConfig,
}

impl SqlFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// 对已替换参数的单行 SQL 排版
    #[must_use]
    pub fn format(&self, sql: &str) -> String {
        let reflowed = reflow(sql, &self.config);
        format_in_clauses(&reflowed, &self.config)
    }
}
