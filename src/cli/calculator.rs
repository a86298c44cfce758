//! # calculator 子命令 CLI 定义
//!
//! 构建默认 FHI-aims 计算器
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 被 `cli/sockets.rs` 复用
//! - 参数传递给 `commands/calculator.rs`

use super::parse_k_grid;
use clap::Args;
use std::path::PathBuf;

/// calculator 子命令参数
#[derive(Args, Debug)]
pub struct CalculatorArgs {
    /// Periodicity: 0 for gas phase, 2 for slabs, 3 for bulk
    #[arg(short, long, allow_negative_numbers = true)]
    pub dimensions: i32,

    /// k-point grid for periodic structures (e.g., '4,4,4' or '6x6x1')
    #[arg(short, long, value_parser = parse_k_grid)]
    pub k_grid: Option<[u32; 3]>,

    /// Directory to write control.in into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the settings as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
