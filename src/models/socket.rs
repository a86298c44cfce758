//! # i-PI socket 封装模型
//!
//! 记录一个被 socket 驱动的 FHI-aims 计算器，以及通信日志路径和端口。
//! 本模块只描述配置，不打开任何连接。
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs` 构建
//! - 使用 `models/calculator.rs`

use super::calculator::{AimsCalculator, OptionValue};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// socket 计算器封装
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocketIoCalculator {
    /// 被封装的 FHI-aims 计算器
    pub calc: AimsCalculator,

    /// socket 通信日志
    pub log: PathBuf,

    /// 监听端口
    pub port: u16,
}

impl SocketIoCalculator {
    pub fn new(calc: AimsCalculator, log: impl Into<PathBuf>, port: u16) -> Self {
        SocketIoCalculator {
            calc,
            log: log.into(),
            port,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log
    }

    /// 被封装计算器中的 `use_pimd_wrapper` 端点
    pub fn endpoint(&self) -> Option<(&str, u16)> {
        match self.calc.get("use_pimd_wrapper") {
            Some(OptionValue::Endpoint(host, port)) => Some((host.as_str(), *port)),
            _ => None,
        }
    }
}
