//! # compare 子命令 CLI 定义
//!
//! 选择比较属性与输出格式。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compare.rs`

use clap::{Args, ValueEnum};

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report with card tables
    #[default]
    Text,
    /// CSV rows (one per card) on stdout
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// compare 子命令参数
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Attribute to compare: 1-5 or population, area, gdp, density, gdp-per-capita
    #[arg(short, long, env = "TRUNFO_ATTRIBUTE", default_value = "4")]
    pub attribute: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
