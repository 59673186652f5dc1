//! # cards 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cards.rs`

use clap::Args;

/// cards 子命令参数
#[derive(Args, Debug)]
pub struct CardsArgs {}
