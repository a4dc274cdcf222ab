//! 把数据库调试日志片段（SQL 语句 + 参数数组）还原为参数已代入、
//! 排版清晰的 SQL。
//!
//! ```
//! use debug_sql_formatter::{config::FormatConfig, process::process_debug_query};
//!
//! let log = "[2024-01-01 10:00:00] LDB: SELECT * FROM users WHERE id = ?\nparams: [1]";
//! let sql = process_debug_query(log, &FormatConfig::default());
//! assert_eq!(sql, "SELECT *\nFROM users\nWHERE id = 1");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod process;
pub mod query;

#[cfg(feature = "logging")]
pub mod logging;

pub use error::{FormatterError, Result};
pub use process::{process_debug_query, render_report, try_process_debug_query};
