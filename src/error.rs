//! # 统一错误处理模块
//!
//! 定义 aimscalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! 两个构建函数本身不做参数校验，唯一可能失败的是主机名解析；
//! 其余变体来自 control.in 渲染、文件写出和命令行参数解析。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// aimscalc 统一错误类型
#[derive(Error, Debug)]
pub enum AimsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Could not resolve local hostname: {reason}")]
    HostnameResolution { reason: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Option '{key}' is present but has no value")]
    IncompleteOption { key: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid k-grid: {0} (expected three positive integers, e.g. '4,4,4')")]
    InvalidKGrid(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AimsError>;
