//! # Trunfo - 城市卡牌对战
//!
//! 两张城市卡牌（圣保罗、里约热内卢），按所选属性比较并输出胜者。
//!
//! ## 子命令
//! - `compare` - 比较两张卡牌（默认）
//! - `cards`   - 只显示两张卡牌
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── models/    (卡牌、属性、内置卡组)
//!   │     ├── compare.rs (胜负判定)
//!   │     └── report.rs  (文本/CSV 渲染)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod compare;
mod error;
mod models;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    pretty_env_logger::init_custom_env("TRUNFO_LOG");

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.into_command()) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
