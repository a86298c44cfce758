//! # calculator 命令实现
//!
//! 构建默认 FHI-aims 计算器并输出其设置。
//!
//! ## 依赖关系
//! - 使用 `cli/calculator.rs` 定义的参数
//! - 使用 `calculator/mod.rs`, `writers/control.rs`, `utils/output.rs`

use super::{print_option_table, warn_missing_k_grid};
use crate::calculator::get_aims_calculator;
use crate::cli::calculator::CalculatorArgs;
use crate::error::Result;
use crate::utils::output;
use crate::writers::control;

/// 执行 calculator 命令
pub fn execute(args: CalculatorArgs) -> Result<()> {
    let calc = get_aims_calculator(args.dimensions, args.k_grid);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
    } else {
        output::print_header(&format!(
            "FHI-aims Calculator (dimensions = {})",
            args.dimensions
        ));
        print_option_table(&calc);
        warn_missing_k_grid(&calc);
    }

    if let Some(dir) = &args.output_dir {
        let path = control::write_control_file(&calc, dir)?;
        if !args.json {
            output::print_written("control.in", &path.display().to_string());
        }
    }

    Ok(())
}
