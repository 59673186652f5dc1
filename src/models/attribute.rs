//! # 比较属性
//!
//! 五种可比较属性及其胜负规则。每个属性独立声明方向，
//! 人口密度是唯一"越小越好"的属性。
//!
//! ## 依赖关系
//! - 被 `cli/compare.rs`, `compare.rs`, `report.rs` 使用
//! - 使用 `models/card.rs`, `error.rs`

use super::card::CityCard;
use crate::error::{Result, TrunfoError};

use serde::Serialize;
use std::str::FromStr;

/// 胜负规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRule {
    HigherWins,
    LowerWins,
}

/// 可比较属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Population,
    Area,
    Gdp,
    Density,
    GdpPerCapita,
}

impl Attribute {
    /// 按选择器编号 (1-5) 排列的全部属性
    pub const ALL: [Attribute; 5] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::Gdp,
        Attribute::Density,
        Attribute::GdpPerCapita,
    ];

    /// 从数字选择器解析
    pub fn from_selector(selector: u8) -> Result<Self> {
        match selector {
            1..=5 => Ok(Self::ALL[usize::from(selector) - 1]),
            _ => Err(TrunfoError::InvalidAttribute {
                selector: selector.to_string(),
            }),
        }
    }

    /// 数字选择器
    pub fn selector(self) -> u8 {
        match self {
            Attribute::Population => 1,
            Attribute::Area => 2,
            Attribute::Gdp => 3,
            Attribute::Density => 4,
            Attribute::GdpPerCapita => 5,
        }
    }

    pub fn win_rule(self) -> WinRule {
        match self {
            Attribute::Density => WinRule::LowerWins,
            Attribute::Population
            | Attribute::Area
            | Attribute::Gdp
            | Attribute::GdpPerCapita => WinRule::HigherWins,
        }
    }

    /// 显示名称
    pub fn display_name(self) -> &'static str {
        match self {
            Attribute::Population => "Population",
            Attribute::Area => "Area (km²)",
            Attribute::Gdp => "GDP (R$ billion)",
            Attribute::Density => "Population Density (hab/km²)",
            Attribute::GdpPerCapita => "GDP per capita (R$)",
        }
    }

    /// 取出卡牌上该属性的数值
    pub fn value_of(self, card: &CityCard) -> f64 {
        match self {
            Attribute::Population => card.population() as f64,
            Attribute::Area => card.area_km2(),
            Attribute::Gdp => card.gdp_billions(),
            Attribute::Density => card.density(),
            Attribute::GdpPerCapita => card.gdp_per_capita(),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 解析选择器（编号或名称）
impl FromStr for Attribute {
    type Err = TrunfoError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();

        if let Ok(number) = key.parse::<u8>() {
            return Self::from_selector(number);
        }

        match key.as_str() {
            "population" | "pop" => Ok(Attribute::Population),
            "area" => Ok(Attribute::Area),
            "gdp" => Ok(Attribute::Gdp),
            "density" | "population-density" => Ok(Attribute::Density),
            "gdp-per-capita" | "per-capita" | "gdppc" => Ok(Attribute::GdpPerCapita),
            _ => Err(TrunfoError::InvalidAttribute {
                selector: s.to_string(),
            }),
        }
    }
}
