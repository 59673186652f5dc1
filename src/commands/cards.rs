//! # cards 命令实现
//!
//! 只显示两张内置卡牌的全部字段。
//!
//! ## 依赖关系
//! - 使用 `cli/cards.rs` 定义的参数
//! - 使用 `models/deck.rs`, `report.rs`, `utils/output.rs`

use crate::cli::cards::CardsArgs;
use crate::error::Result;
use crate::models::deck;
use crate::report;
use crate::utils::output;

/// 执行 cards 命令
pub fn execute(_args: CardsArgs) -> Result<()> {
    let (first, second) = deck::builtin_pair()?;

    output::print_header("SUPER TRUNFO CITIES");
    println!("{}", report::render_cards(&first, &second));

    Ok(())
}
