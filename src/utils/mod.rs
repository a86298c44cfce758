//! # 工具函数模块
//!
//! 提供美化输出、主机名解析、Slurm 脚本生成等工具。
//!
//! ## 依赖关系
//! - 被 `calculator/` 和 `commands/` 模块使用
//! - 子模块: output, hostname, slurm

pub mod hostname;
pub mod output;
pub mod slurm;
