//! # 输入文件写出模块
//!
//! 将计算器配置渲染为 FHI-aims 输入文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: control

pub mod control;
