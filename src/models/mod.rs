//! # 数据模型模块
//!
//! 定义 FHI-aims 计算器配置与 socket 封装的数据模型。
//!
//! ## 依赖关系
//! - 被 `calculator/`, `writers/` 和 `commands/` 使用
//! - 子模块: calculator, socket

pub mod calculator;
pub mod socket;

pub use calculator::{AimsCalculator, OptionValue};
pub use socket::SocketIoCalculator;
