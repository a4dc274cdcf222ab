/// 单个绑定参数的值
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Null,
    Boolean(bool),
    Integer(i64),
    /// 超出 i64 范围的整数，保留十进制原文
    BigInteger(String),
    Float(f64),
    Text(String),
}

impl ParameterValue {
    /// 渲染为可直接写入 SQL 的字面量。
    ///
    /// - `Null` → `NULL`
    /// - `Boolean` → `TRUE` / `FALSE`
    /// - 数字 → 不带引号的十进制文本，浮点数保留小数部分（`3.0`）
    /// - `Text` → 单引号包裹，内部单引号双写（`O'Brien` → `'O''Brien'`）
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Boolean(true) => "TRUE".to_string(),
            Self::Boolean(false) => "FALSE".to_string(),
            Self::Integer(v) => v.to_string(),
            Self::BigInteger(digits) => digits.clone(),
            Self::Float(v) => format!("{v:?}"),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

/// 参数数组采用的解码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// 不是 `[...]` 形式，未尝试解码
    Skipped,
    /// 按 JSON 数组成功解析
    Structured,
    /// JSON 解析失败，退化为按逗号切分
    NaiveSplit,
}

/// 按出现顺序排列的参数序列
#[derive(Debug, Clone, PartialEq)]
pub struct ParamList {
    pub values: Vec<ParameterValue>,
    pub strategy: DecodeStrategy,
}

impl ParamList {
    pub fn empty() -> Self {
        Self { values: Vec::new(), strategy: DecodeStrategy::Skipped }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 从调试日志中提取出的 SQL 模板和原始参数文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedQuery {
    /// 带 `?` 占位符的单行 SQL
    pub template: String,
    /// `params:` 之后的原始文本，没有参数行时为 `None`
    pub raw_params: Option<String>,
}
