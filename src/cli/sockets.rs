//! # sockets 子命令 CLI 定义
//!
//! 构建 i-PI socket 封装，并可生成计算节点上的 sbatch 脚本
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sockets.rs`

use super::calculator::CalculatorArgs;
use crate::calculator::{DEFAULT_LOGFILE, DEFAULT_PORT};
use clap::Args;
use std::path::PathBuf;

/// sockets 子命令参数
#[derive(Args, Debug)]
pub struct SocketsArgs {
    #[command(flatten)]
    pub calc: CalculatorArgs,

    /// Port for the i-PI socket between ASE and FHI-aims
    #[arg(long, env = "AIMS_SOCKET_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host running ASE (defaults to this machine's hostname)
    #[arg(long, env = "AIMS_SOCKET_HOST")]
    pub host: Option<String>,

    /// Log file for socket communication
    #[arg(long, default_value = DEFAULT_LOGFILE)]
    pub logfile: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // Slurm options
    // ─────────────────────────────────────────────────────────────
    /// Also write submit.sbatch launching FHI-aims against the socket
    #[arg(long, default_value_t = false)]
    pub sbatch: bool,

    /// FHI-aims executable name
    #[arg(long, default_value = "aims.x")]
    pub aims_exec: String,

    /// Number of MPI processes for FHI-aims (defaults to --ntasks)
    #[arg(long)]
    pub np: Option<u32>,

    /// Module list for FHI-aims (comma-separated)
    #[arg(long, default_value = "")]
    pub modules: String,

    /// Slurm job name
    #[arg(long, default_value = "aims")]
    pub job_name: String,

    /// Slurm partition
    #[arg(long, default_value = "compute")]
    pub partition: String,

    /// Number of nodes
    #[arg(long, default_value_t = 1)]
    pub nodes: u32,

    /// Number of tasks
    #[arg(long, default_value_t = 32)]
    pub ntasks: u32,

    /// CPUs per task
    #[arg(long, default_value_t = 1)]
    pub cpus_per_task: u32,

    /// Memory per CPU
    #[arg(long, default_value = "2G")]
    pub mem_per_cpu: String,

    /// Time limit (e.g., '24:00:00')
    #[arg(long, default_value = "24:00:00")]
    pub time: String,
}

impl SocketsArgs {
    /// mpirun 进程数，未指定 `--np` 时与 Slurm 任务数一致
    pub fn mpi_processes(&self) -> u32 {
        self.np.unwrap_or(self.ntasks)
    }
}
