//! # 报告渲染
//!
//! 将卡牌与比较结果渲染为文本（终端表格）或 CSV。
//! 只负责格式化，不做任何判定。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `compare.rs`
//! - 使用 `tabled`, `csv`

use crate::compare::{Comparison, Outcome};
use crate::error::Result;
use crate::models::{Attribute, CityCard};

use serde::Serialize;
use std::io::Write;
use tabled::{Table, Tabled};

/// 卡牌表格行
#[derive(Debug, Clone, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// CSV 输出行
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    card: usize,
    code: &'a str,
    state: &'a str,
    city: &'a str,
    population: u64,
    area_km2: f64,
    gdp_billions: f64,
    tourist_sites: u32,
    density: f64,
    gdp_per_capita: f64,
    attribute: Attribute,
    value: f64,
    winner: bool,
}

/// 千位分隔的整数 (12,396,372)
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// 按属性格式化比较值
pub fn format_value(attribute: Attribute, value: f64) -> String {
    match attribute {
        Attribute::Population => format!("{:.0}", value),
        Attribute::Gdp => format!("R$ {:.2} billion", value),
        Attribute::GdpPerCapita => format!("R$ {:.2}", value),
        Attribute::Area | Attribute::Density => format!("{:.2}", value),
    }
}

/// 渲染单张卡牌的全部字段
pub fn render_card(card: &CityCard) -> String {
    let rows = vec![
        FieldRow {
            field: "Code",
            value: card.code().to_string(),
        },
        FieldRow {
            field: "City",
            value: card.label(),
        },
        FieldRow {
            field: "Population",
            value: format!("{} hab", format_thousands(card.population())),
        },
        FieldRow {
            field: "Area",
            value: format!("{:.2} km²", card.area_km2()),
        },
        FieldRow {
            field: "GDP",
            value: format!("R$ {:.2} billion", card.gdp_billions()),
        },
        FieldRow {
            field: "Tourist Sites",
            value: card.tourist_sites().to_string(),
        },
        FieldRow {
            field: "Population Density",
            value: format!("{:.2} hab/km²", card.density()),
        },
        FieldRow {
            field: "GDP per capita",
            value: format!("R$ {:.2}", card.gdp_per_capita()),
        },
    ];

    Table::new(rows).to_string()
}

/// 渲染两张卡牌
pub fn render_cards(first: &CityCard, second: &CityCard) -> String {
    format!(
        "--- Card 1 ---\n{}\n\n--- Card 2 ---\n{}\n",
        render_card(first),
        render_card(second)
    )
}

/// 渲染比较明细（属性值）
pub fn render_comparison(first: &CityCard, second: &CityCard, comparison: &Comparison) -> String {
    let attr = comparison.attribute;
    format!(
        "  Card 1 - {}: {}\n  Card 2 - {}: {}\n",
        first.label(),
        format_value(attr, comparison.first_value),
        second.label(),
        format_value(attr, comparison.second_value)
    )
}

/// 结果行
pub fn result_line(first: &CityCard, second: &CityCard, outcome: Outcome) -> String {
    match outcome {
        Outcome::First => format!("Result: Card 1 ({}) wins!", first.name()),
        Outcome::Second => format!("Result: Card 2 ({}) wins!", second.name()),
        Outcome::Tie => "Result: Tie!".to_string(),
    }
}

/// 以 CSV 写出两张卡牌及比较结果
pub fn write_csv<W: Write>(
    writer: W,
    first: &CityCard,
    second: &CityCard,
    comparison: &Comparison,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let entries = [
        (first, comparison.first_value, Outcome::First),
        (second, comparison.second_value, Outcome::Second),
    ];

    for (i, (card, value, winning)) in entries.into_iter().enumerate() {
        wtr.serialize(CsvRow {
            card: i + 1,
            code: card.code(),
            state: card.state(),
            city: card.name(),
            population: card.population(),
            area_km2: card.area_km2(),
            gdp_billions: card.gdp_billions(),
            tourist_sites: card.tourist_sites(),
            density: card.density(),
            gdp_per_capita: card.gdp_per_capita(),
            attribute: comparison.attribute,
            value,
            winner: comparison.outcome == winning,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
