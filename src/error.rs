//! # 统一错误处理模块
//!
//! 定义 Trunfo 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Trunfo 统一错误类型
#[derive(Error, Debug)]
pub enum TrunfoError {
    // ─────────────────────────────────────────────────────────────
    // 比较错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid comparison attribute: '{selector}' (expected 1-5 or population, area, gdp, density, gdp-per-capita)")]
    InvalidAttribute { selector: String },

    // ─────────────────────────────────────────────────────────────
    // 卡牌数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid card input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TrunfoError>;
