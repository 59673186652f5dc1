//! # 城市卡牌数据模型
//!
//! 存储一张城市卡牌的原始属性以及构造时计算出的派生属性
//! （人口密度、人均 GDP）。
//!
//! ## 文本字段宽度
//! 文本字段为变长 `String`，构造时按字符（而非字节）截断到最大显示宽度：
//! - 州代码: 2 字符
//! - 卡牌代码: 4 字符
//! - 城市名称: 49 字符
//!
//! 截断不视为错误。
//!
//! ## 依赖关系
//! - 被 `models/deck.rs`, `compare.rs`, `report.rs` 使用
//! - 使用 `error.rs`

use crate::error::{Result, TrunfoError};

use serde::Serialize;

/// 州代码最大显示宽度
pub const MAX_STATE_CHARS: usize = 2;

/// 卡牌代码最大显示宽度
pub const MAX_CODE_CHARS: usize = 4;

/// 城市名称最大显示宽度
pub const MAX_NAME_CHARS: usize = 49;

/// 构造卡牌所需的原始字段
#[derive(Debug, Clone)]
pub struct CardFields {
    /// 州代码 (e.g. "SP")
    pub state: String,
    /// 卡牌代码 (e.g. "C01")
    pub code: String,
    /// 城市名称
    pub name: String,
    /// 人口
    pub population: u64,
    /// 面积 (km²)
    pub area_km2: f64,
    /// GDP (十亿 R$)
    pub gdp_billions: f64,
    /// 旅游景点数量
    pub tourist_sites: u32,
}

impl CardFields {
    pub fn new(
        state: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        population: u64,
        area_km2: f64,
        gdp_billions: f64,
        tourist_sites: u32,
    ) -> Self {
        CardFields {
            state: state.into(),
            code: code.into(),
            name: name.into(),
            population,
            area_km2,
            gdp_billions,
            tourist_sites,
        }
    }
}

/// 城市卡牌
///
/// 字段只读；派生属性只在构造时计算一次，之后与原始属性始终一致。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityCard {
    state: String,
    code: String,
    name: String,
    population: u64,
    area_km2: f64,
    gdp_billions: f64,
    tourist_sites: u32,
    density: f64,
    gdp_per_capita: f64,
}

impl CityCard {
    /// 从可信字面量构造卡牌，永不失败
    pub fn new(fields: CardFields) -> Self {
        let density = population_density(fields.population, fields.area_km2);
        let gdp_per_capita = gdp_per_capita(fields.gdp_billions, fields.population);

        let card = CityCard {
            state: truncate_chars(&fields.state, MAX_STATE_CHARS),
            code: truncate_chars(&fields.code, MAX_CODE_CHARS),
            name: truncate_chars(&fields.name, MAX_NAME_CHARS),
            population: fields.population,
            area_km2: fields.area_km2,
            gdp_billions: fields.gdp_billions,
            tourist_sites: fields.tourist_sites,
            density,
            gdp_per_capita,
        };

        log::debug!(
            "Built card {} '{}': density={:.2}, gdp_per_capita={:.2}",
            card.code,
            card.name,
            card.density,
            card.gdp_per_capita
        );

        card
    }

    /// 校验不可信输入后构造卡牌
    ///
    /// 面积为 0 不是错误（密度记为 0），负数或非有限数值则拒绝。
    pub fn validated(fields: CardFields) -> Result<Self> {
        check_non_negative("area", fields.area_km2)?;
        check_non_negative("gdp", fields.gdp_billions)?;
        Ok(Self::new(fields))
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn area_km2(&self) -> f64 {
        self.area_km2
    }

    pub fn gdp_billions(&self) -> f64 {
        self.gdp_billions
    }

    pub fn tourist_sites(&self) -> u32 {
        self.tourist_sites
    }

    /// 人口密度 (hab/km²)
    pub fn density(&self) -> f64 {
        self.density
    }

    /// 人均 GDP (R$)
    pub fn gdp_per_capita(&self) -> f64 {
        self.gdp_per_capita
    }

    /// "城市 (州)" 形式的标签
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.state)
    }
}

/// 人口 / 面积；面积非正时为 0
pub fn population_density(population: u64, area_km2: f64) -> f64 {
    if area_km2 > 0.0 {
        population as f64 / area_km2
    } else {
        0.0
    }
}

/// GDP × 10⁹ / 人口；人口为 0 时为 0
pub fn gdp_per_capita(gdp_billions: f64, population: u64) -> f64 {
    if population > 0 {
        gdp_billions * 1e9 / population as f64
    } else {
        0.0
    }
}

/// 按字符截断，不会切断 UTF-8 序列
fn truncate_chars(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    if truncated.len() < text.len() {
        log::debug!("Truncated '{}' to {} chars", text, max_chars);
    }
    truncated
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(TrunfoError::InvalidInput {
            field: field.to_string(),
            reason: format!("value must be finite, got {}", value),
        });
    }
    if value < 0.0 {
        return Err(TrunfoError::InvalidInput {
            field: field.to_string(),
            reason: format!("value must not be negative, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(population: u64, area: f64, gdp: f64) -> CardFields {
        CardFields::new("SP", "C01", "São Paulo", population, area, gdp, 15)
    }

    #[test]
    fn test_density_for_positive_area() {
        let card = CityCard::new(fields(12_396_372, 1521.1, 768.61));
        assert!((card.density() - 12_396_372.0 / 1521.1).abs() < 1e-9);
    }

    #[test]
    fn test_density_zero_for_non_positive_area() {
        assert_eq!(CityCard::new(fields(1000, 0.0, 1.0)).density(), 0.0);
        assert_eq!(CityCard::new(fields(1000, -5.0, 1.0)).density(), 0.0);
    }

    #[test]
    fn test_gdp_per_capita() {
        let card = CityCard::new(fields(12_396_372, 1521.1, 768.61));
        let expected = 768.61 * 1e9 / 12_396_372.0;
        assert!((card.gdp_per_capita() - expected).abs() < 1e-6);
        // ≈ 62,002.8
        assert!((card.gdp_per_capita() - 62_002.8).abs() < 1.0);
    }

    #[test]
    fn test_gdp_per_capita_zero_population() {
        let card = CityCard::new(fields(0, 100.0, 50.0));
        assert_eq!(card.gdp_per_capita(), 0.0);
        assert_eq!(card.density(), 0.0);
    }

    #[test]
    fn test_truncates_text_fields_by_chars() {
        let long_name = "Ã".repeat(60);
        let card = CityCard::new(CardFields::new(
            "São", "C0001", long_name, 10, 1.0, 1.0, 0,
        ));

        assert_eq!(card.state(), "Sã");
        assert_eq!(card.code(), "C000");
        assert_eq!(card.name().chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_short_text_kept_as_is() {
        let card = CityCard::new(fields(10, 1.0, 1.0));
        assert_eq!(card.state(), "SP");
        assert_eq!(card.code(), "C01");
        assert_eq!(card.name(), "São Paulo");
        assert_eq!(card.label(), "São Paulo (SP)");
    }

    #[test]
    fn test_validated_accepts_zero_area() {
        let card = CityCard::validated(fields(10, 0.0, 1.0)).unwrap();
        assert_eq!(card.density(), 0.0);
    }

    #[test]
    fn test_validated_rejects_negative_area() {
        let err = CityCard::validated(fields(10, -1.0, 1.0)).unwrap_err();
        assert!(matches!(err, TrunfoError::InvalidInput { ref field, .. } if field == "area"));
    }

    #[test]
    fn test_validated_rejects_non_finite() {
        assert!(CityCard::validated(fields(10, f64::NAN, 1.0)).is_err());
        assert!(CityCard::validated(fields(10, f64::INFINITY, 1.0)).is_err());
        assert!(CityCard::validated(fields(10, 1.0, f64::NAN)).is_err());
        assert!(CityCard::validated(fields(10, 1.0, -3.0)).is_err());
    }
}
