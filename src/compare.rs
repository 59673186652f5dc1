//! # 卡牌比较
//!
//! 按所选属性的胜负规则比较两张卡牌。
//!
//! 平局判定使用精确相等，不设容差。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs`, `report.rs` 使用
//! - 使用 `models/`

use crate::models::{Attribute, CityCard, WinRule};

/// 比较结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    First,
    Second,
    Tie,
}

/// 一次比较的完整记录
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub attribute: Attribute,
    pub first_value: f64,
    pub second_value: f64,
    pub outcome: Outcome,
}

impl Comparison {
    pub fn attribute_name(&self) -> &'static str {
        self.attribute.display_name()
    }
}

/// 比较两张卡牌
pub fn compare(first: &CityCard, second: &CityCard, attribute: Attribute) -> Comparison {
    let first_value = attribute.value_of(first);
    let second_value = attribute.value_of(second);
    let outcome = decide(first_value, second_value, attribute.win_rule());

    log::debug!(
        "Compared {} vs {} on {:?}: {} vs {} -> {:?}",
        first.code(),
        second.code(),
        attribute,
        first_value,
        second_value,
        outcome
    );

    Comparison {
        attribute,
        first_value,
        second_value,
        outcome,
    }
}

/// 按规则判定胜者
fn decide(first: f64, second: f64, rule: WinRule) -> Outcome {
    let (first_wins, second_wins) = match rule {
        WinRule::HigherWins => (first > second, second > first),
        WinRule::LowerWins => (first < second, second < first),
    };

    if first_wins {
        Outcome::First
    } else if second_wins {
        Outcome::Second
    } else {
        Outcome::Tie
    }
}
