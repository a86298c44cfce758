//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calculator`: 构建默认 FHI-aims 计算器
//! - `sockets`: 构建 i-PI socket 封装及其 FHI-aims 计算器
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calculator, sockets

pub mod calculator;
pub mod sockets;

use crate::error::{AimsError, Result};
use clap::{Parser, Subcommand};
use regex::Regex;

/// aimscalc - 预设 FHI-aims 计算器构建工具
#[derive(Parser)]
#[command(name = "aimscalc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Preset FHI-aims calculator and i-PI socket configuration builder")]
#[command(long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build the default FHI-aims calculator settings
    Calculator(calculator::CalculatorArgs),

    /// Build an i-PI socket wrapper around the default FHI-aims calculator
    Sockets(sockets::SocketsArgs),
}

/// 解析 k 点网格 (e.g., "4,4,4", "4x4x1", "3 3 3")
pub fn parse_k_grid(expr: &str) -> Result<[u32; 3]> {
    let pattern = Regex::new(r"^\s*(\d+)\s*[,xX\s]\s*(\d+)\s*[,xX\s]\s*(\d+)\s*$")
        .map_err(|e| AimsError::InvalidArgument(e.to_string()))?;

    let caps = pattern
        .captures(expr)
        .ok_or_else(|| AimsError::InvalidKGrid(expr.to_string()))?;

    let mut grid = [0u32; 3];
    for (i, slot) in grid.iter_mut().enumerate() {
        *slot = caps[i + 1]
            .parse()
            .map_err(|_| AimsError::InvalidKGrid(expr.to_string()))?;
    }

    if grid.contains(&0) {
        return Err(AimsError::InvalidKGrid(expr.to_string()));
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_k_grid_formats() {
        assert_eq!(parse_k_grid("4,4,4").unwrap(), [4, 4, 4]);
        assert_eq!(parse_k_grid("6x6x1").unwrap(), [6, 6, 1]);
        assert_eq!(parse_k_grid(" 3 3 3 ").unwrap(), [3, 3, 3]);
        assert_eq!(parse_k_grid("8, 8, 2").unwrap(), [8, 8, 2]);
    }

    #[test]
    fn test_parse_k_grid_invalid() {
        for bad in ["", "4,4", "4,4,4,4", "a,b,c", "4,0,4", "-1,2,2"] {
            assert!(
                matches!(parse_k_grid(bad), Err(AimsError::InvalidKGrid(_))),
                "accepted '{}'",
                bad
            );
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sockets_command() {
        let cli = Cli::try_parse_from([
            "aimscalc",
            "sockets",
            "--dimensions",
            "2",
            "--k-grid",
            "3,3,1",
            "--host",
            "node1",
            "--port",
            "9999",
        ])
        .unwrap();

        match cli.command {
            Commands::Sockets(args) => {
                assert_eq!(args.calc.dimensions, 2);
                assert_eq!(args.calc.k_grid, Some([3, 3, 1]));
                assert_eq!(args.host.as_deref(), Some("node1"));
                assert_eq!(args.port, 9999);
                assert_eq!(args.logfile.to_str(), Some("socketio.log"));
            }
            _ => panic!("expected sockets subcommand"),
        }
    }

    #[test]
    fn test_mpi_processes_follow_ntasks() {
        let parse = |extra: &[&str]| {
            let mut argv = vec!["aimscalc", "sockets", "--dimensions", "0", "--host", "node1"];
            argv.extend_from_slice(extra);
            match Cli::try_parse_from(argv).unwrap().command {
                Commands::Sockets(args) => args,
                _ => panic!("expected sockets subcommand"),
            }
        };

        assert_eq!(parse(&[]).mpi_processes(), 32);
        assert_eq!(parse(&["--ntasks", "64"]).mpi_processes(), 64);
        assert_eq!(parse(&["--ntasks", "64", "--np", "16"]).mpi_processes(), 16);
    }

    #[test]
    fn test_negative_dimensions_accepted() {
        let cli =
            Cli::try_parse_from(["aimscalc", "calculator", "--dimensions", "-1"]).unwrap();
        match cli.command {
            Commands::Calculator(args) => {
                assert_eq!(args.dimensions, -1);
                assert_eq!(args.k_grid, None);
            }
            _ => panic!("expected calculator subcommand"),
        }
    }
}
