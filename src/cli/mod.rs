//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - 无子命令: 等同于 `compare`（默认比较人口密度）
//! - `compare`: 显示两张卡牌并按属性比较
//! - `cards`: 只显示两张卡牌
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: compare, cards

pub mod cards;
pub mod compare;

use clap::{Parser, Subcommand};

/// Trunfo - 城市卡牌对战
#[derive(Parser)]
#[command(name = "trunfo")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Super Trunfo city card comparison", long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub compare: compare::CompareArgs,
}

impl Cli {
    /// 未指定子命令时回落到 `compare`
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Compare(self.compare))
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Show both cards and compare them on one attribute
    Compare(compare::CompareArgs),

    /// Show both cards without comparing
    Cards(cards::CardsArgs),
}
