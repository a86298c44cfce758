//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `calculator/`, `writers/`, `utils/`
//! - 子模块: calculator, sockets

pub mod calculator;
pub mod sockets;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::{AimsCalculator, OptionValue};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calculator(args) => calculator::execute(args),
        Commands::Sockets(args) => sockets::execute(args),
    }
}

/// 选项表格行
#[derive(Debug, Clone, Tabled)]
struct OptionRow {
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 打印计算器选项表格
fn print_option_table(calc: &AimsCalculator) {
    let rows: Vec<OptionRow> = calc
        .iter()
        .map(|(key, value)| OptionRow {
            keyword: key.to_string(),
            value: value.to_string(),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

/// 周期性结构缺少 k_grid 时给出提示（不报错）
fn warn_missing_k_grid(calc: &AimsCalculator) {
    if let Some(OptionValue::Unset) = calc.get("k_grid") {
        output::print_warning("Periodic structure without --k-grid: 'k_grid' is left unset");
    }
}
