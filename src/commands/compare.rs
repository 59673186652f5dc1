//! # compare 命令实现
//!
//! 显示两张内置卡牌，按所选属性比较并输出胜者。
//!
//! ## 功能
//! - 解析属性选择器（无效时在任何输出之前报错）
//! - 文本报告：卡牌表格 + 比较明细 + 结果行
//! - CSV 报告：每张卡牌一行
//!
//! ## 依赖关系
//! - 使用 `cli/compare.rs` 定义的参数
//! - 使用 `models/`, `compare.rs`, `report.rs`, `utils/output.rs`

use crate::cli::compare::{CompareArgs, OutputFormat};
use crate::compare::{self, Comparison};
use crate::error::Result;
use crate::models::{deck, Attribute, CityCard};
use crate::report;
use crate::utils::output;

/// 执行 compare 命令
pub fn execute(args: CompareArgs) -> Result<()> {
    let (first, second, comparison) = resolve(&args)?;

    match args.format {
        OutputFormat::Text => print_text(&first, &second, &comparison),
        OutputFormat::Csv => {
            let stdout = std::io::stdout();
            report::write_csv(stdout.lock(), &first, &second, &comparison)?;
        }
    }

    Ok(())
}

/// 解析属性并完成比较
fn resolve(args: &CompareArgs) -> Result<(CityCard, CityCard, Comparison)> {
    let attribute: Attribute = args.attribute.parse()?;
    log::debug!(
        "Selector '{}' resolved to {:?} (#{})",
        args.attribute,
        attribute,
        attribute.selector()
    );

    let (first, second) = deck::builtin_pair()?;
    let comparison = compare::compare(&first, &second, attribute);

    Ok((first, second, comparison))
}

fn print_text(first: &CityCard, second: &CityCard, comparison: &Comparison) {
    output::print_header("SUPER TRUNFO CITIES");
    println!("{}", report::render_cards(first, second));

    output::print_header(&format!(
        "Card comparison (Attribute: {})",
        comparison.attribute_name()
    ));
    println!("{}", report::render_comparison(first, second, comparison));

    output::print_result(&report::result_line(first, second, comparison.outcome));
    output::print_separator();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Outcome;
    use crate::error::TrunfoError;

    fn args(attribute: &str) -> CompareArgs {
        CompareArgs {
            attribute: attribute.to_string(),
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_density_rio_wins() {
        let (_, second, comparison) = resolve(&args("4")).unwrap();
        assert_eq!(comparison.attribute, Attribute::Density);
        assert_eq!(comparison.outcome, Outcome::Second);
        assert_eq!(second.name(), "Rio de Janeiro");
    }

    #[test]
    fn test_population_sao_paulo_wins() {
        let (first, _, comparison) = resolve(&args("1")).unwrap();
        assert_eq!(comparison.outcome, Outcome::First);
        assert_eq!(first.name(), "São Paulo");
    }

    #[test]
    fn test_gdp_per_capita_sao_paulo_wins() {
        let (_, _, comparison) = resolve(&args("gdp-per-capita")).unwrap();
        assert_eq!(comparison.attribute, Attribute::GdpPerCapita);
        assert_eq!(comparison.outcome, Outcome::First);
    }

    #[test]
    fn test_invalid_selector_fails_before_output() {
        let err = execute(args("6")).unwrap_err();
        assert!(matches!(err, TrunfoError::InvalidAttribute { ref selector } if selector == "6"));
    }

    #[test]
    fn test_csv_format_runs() {
        let csv_args = CompareArgs {
            attribute: "2".to_string(),
            format: OutputFormat::Csv,
        };
        assert!(execute(csv_args).is_ok());
    }
}
