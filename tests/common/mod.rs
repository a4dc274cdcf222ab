//! 集成测试公共模块

/// 带时间戳前缀和参数行的标准调试日志
#[allow(dead_code)]
pub const SAMPLE_DEBUG_LOG: &str = r#"[2024-01-01 10:00:00] LDB: SELECT * FROM users WHERE id = ? AND name = ?
params: [1, "Alice"]
"#;

/// 没有参数行的调试日志
#[allow(dead_code)]
pub const NO_PARAMS_DEBUG_LOG: &str =
    "[2024-01-01 10:00:01] LDB: SELECT id, name FROM users ORDER BY name LIMIT 10\n";

/// 多行日志，包含与 SQL 无关的噪声行
#[allow(dead_code)]
pub const NOISY_DEBUG_LOG: &str = r#"[2024-01-01 10:00:02] INFO: request started
[2024-01-01 10:00:02] LDB: select l.id, l.name from layers l left join factions f on f.id = l.faction where l.map in (?, ?, ?, ?, ?, ?) and l.size = ? order by l.name
params: ["Narva", "Gorodok", "Yehorivka", "Mutaha", "Fallujah", "Kohat", 'Large']
[2024-01-01 10:00:02] INFO: request finished
"#;

/// 生成带 n 个占位符的 IN 查询及对应的参数行
#[allow(dead_code)]
pub fn in_list_log(n: usize) -> String {
    let placeholders = vec!["?"; n].join(", ");
    let values: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
    format!(
        "[2024-01-01 10:00:03] LDB: SELECT * FROM t WHERE id IN ({placeholders})\nparams: [{}]",
        values.join(", ")
    )
}
