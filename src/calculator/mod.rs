//! # 预设计算器构建
//!
//! 提供组内统一的 FHI-aims 默认设置，以及与之配套的 i-PI socket 封装。
//! 修改默认值会影响所有使用者，请先与组内讨论。
//!
//! ## 默认设置
//! - `xc pbe`
//! - `spin none`
//! - `relativistic atomic_zora scalar`
//! - `compute_forces .true.`
//!
//! ## 维度规则
//! - `dimensions == 2`: 额外设置 `use_dipole_correction`
//! - `dimensions >= 2`: 额外设置 `k_grid`（未提供时为 `Unset`，不做校验）
//!
//! ## 依赖关系
//! - 使用 `models/`, `utils/hostname.rs`
//! - 被 `commands/` 使用

use crate::error::Result;
use crate::models::{AimsCalculator, OptionValue, SocketIoCalculator};
use crate::utils::hostname::resolve_hostname;

use std::path::PathBuf;

/// 默认 socket 端口
pub const DEFAULT_PORT: u16 = 12345;

/// 默认 socket 日志文件
pub const DEFAULT_LOGFILE: &str = "socketio.log";

/// socket 封装参数
#[derive(Debug, Clone)]
pub struct SocketOptions {
    /// ASE 与 FHI-aims 之间的端口，只要不与本机其他服务冲突即可
    pub port: u16,

    /// ASE 所在主机名；为 `None` 时自动解析本机主机名
    pub host: Option<String>,

    /// socket 通信日志
    pub logfile: PathBuf,
}

impl Default for SocketOptions {
    fn default() -> Self {
        SocketOptions {
            port: DEFAULT_PORT,
            host: None,
            logfile: PathBuf::from(DEFAULT_LOGFILE),
        }
    }
}

/// 构建默认 FHI-aims 计算器
///
/// `dimensions` 为 0 表示气相分子，2 或 3 表示对应维度的周期性结构。
/// 其他取值不报错，只得到分子默认设置。
pub fn get_aims_calculator(dimensions: i32, k_grid: Option<[u32; 3]>) -> AimsCalculator {
    let mut calc = AimsCalculator::new();
    calc.set("xc", "pbe")
        .set("spin", "none")
        .set("relativistic", OptionValue::words(["atomic_zora", "scalar"]))
        .set("compute_forces", true);

    if dimensions == 2 {
        calc.set("use_dipole_correction", true);
    }

    if dimensions >= 2 {
        calc.set("k_grid", k_grid);
    }

    calc
}

/// 构建 socket 封装及其内部的 FHI-aims 计算器
///
/// 返回 `(socket 封装, 计算器)`；两者中的计算器配置相同。
/// 仅当需要解析主机名且解析失败时返回错误。
pub fn get_aims_and_sockets_calculator(
    dimensions: i32,
    k_grid: Option<[u32; 3]>,
    options: &SocketOptions,
) -> Result<(SocketIoCalculator, AimsCalculator)> {
    let host = match &options.host {
        Some(host) => host.clone(),
        None => resolve_hostname()?,
    };

    let mut fhi_calc = get_aims_calculator(dimensions, k_grid);
    fhi_calc.set("use_pimd_wrapper", OptionValue::Endpoint(host, options.port));

    let socket_calc = SocketIoCalculator::new(fhi_calc.clone(), &options.logfile, options.port);

    Ok((socket_calc, fhi_calc))
}
