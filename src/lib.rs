//! # aimscalc - 预设 FHI-aims 计算器构建工具
//!
//! 为 ASE 驱动的 FHI-aims 计算提供组内统一的默认设置，
//! 以及基于 i-PI socket 的封装配置。
//!
//! ## 主要接口
//! - [`get_aims_calculator`] - 按维度构建默认计算器
//! - [`get_aims_and_sockets_calculator`] - 构建 socket 封装及其计算器
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── calculator/ (预设构建函数)
//!   ├── models/     (数据模型)
//!   ├── writers/    (control.in 写出)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod utils;
pub mod writers;

pub use calculator::{get_aims_and_sockets_calculator, get_aims_calculator, SocketOptions};
pub use error::{AimsError, Result};
pub use models::{AimsCalculator, OptionValue, SocketIoCalculator};
