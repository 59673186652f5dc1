//! # 数据模型模块
//!
//! 定义城市卡牌、比较属性与内置卡组。
//!
//! ## 依赖关系
//! - 被 `compare.rs`, `report.rs` 和 `commands/` 使用
//! - 子模块: card, attribute, deck

pub mod attribute;
pub mod card;
pub mod deck;

pub use attribute::{Attribute, WinRule};
pub use card::{CardFields, CityCard};
