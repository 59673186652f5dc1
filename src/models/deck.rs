//! # 内置卡组
//!
//! 两张内置城市卡牌：圣保罗与里约热内卢（IBGE 2021 人口，2020 年 GDP）。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/card.rs`

use super::{CardFields, CityCard};
use crate::error::Result;

/// 内置卡牌的原始字段
pub fn builtin_fields() -> [CardFields; 2] {
    [
        CardFields::new("SP", "C01", "São Paulo", 12_396_372, 1521.1, 768.61, 15),
        CardFields::new("RJ", "C02", "Rio de Janeiro", 6_772_497, 1200.3, 359.21, 20),
    ]
}

/// 构造两张内置卡牌
pub fn builtin_pair() -> Result<(CityCard, CityCard)> {
    let [first, second] = builtin_fields();
    Ok((CityCard::validated(first)?, CityCard::validated(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pair() {
        let (sp, rj) = builtin_pair().unwrap();

        assert_eq!(sp.code(), "C01");
        assert_eq!(sp.state(), "SP");
        assert_eq!(sp.population(), 12_396_372);
        assert_eq!(sp.tourist_sites(), 15);

        assert_eq!(rj.code(), "C02");
        assert_eq!(rj.name(), "Rio de Janeiro");
        assert_eq!(rj.tourist_sites(), 20);
    }

    #[test]
    fn test_builtin_derived_values() {
        let (sp, rj) = builtin_pair().unwrap();

        assert!((sp.density() - 8149.61).abs() < 0.01);
        assert!((rj.density() - 5642.34).abs() < 0.01);
        assert!((rj.gdp_per_capita() - 53_039.5).abs() < 1.0);
    }
}
