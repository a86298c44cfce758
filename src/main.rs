//! # aimscalc 命令行入口
//!
//! ## 子命令
//! - `calculator` - 默认 FHI-aims 计算器
//! - `sockets`    - i-PI socket 封装 + FHI-aims 计算器

use aimscalc::cli::Cli;
use aimscalc::commands;
use aimscalc::utils::output;
use clap::Parser;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
