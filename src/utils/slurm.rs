//! # Slurm 脚本生成工具
//!
//! 为 socket 模式的 FHI-aims 生成 sbatch 提交脚本。ASE 驱动端在登录节点
//! 监听 `host:port`，FHI-aims 在计算节点启动后主动连接。
//!
//! ## 依赖关系
//! - 被 `commands/sockets.rs` 使用
//! - 无外部模块依赖

use std::path::Path;

/// Slurm 作业配置
#[derive(Debug, Clone)]
pub struct SlurmConfig {
    pub job_name: String,
    pub partition: String,
    pub nodes: u32,
    pub ntasks: u32,
    pub cpus_per_task: u32,
    pub mem_per_cpu: String,
    pub time_limit: String,
    pub modules: Vec<String>,
}

impl Default for SlurmConfig {
    fn default() -> Self {
        SlurmConfig {
            job_name: "aims".to_string(),
            partition: "compute".to_string(),
            nodes: 1,
            ntasks: 32,
            cpus_per_task: 1,
            mem_per_cpu: "2G".to_string(),
            time_limit: "24:00:00".to_string(),
            modules: vec![],
        }
    }
}

/// 拼接 mpirun 启动命令
pub fn aims_exec_command(np: u32, aims_exec: &str) -> String {
    format!("mpirun -np {} {} > aims.out", np, aims_exec)
}

/// 生成 sbatch 脚本内容
///
/// `endpoint` 为 FHI-aims 需要连接的 `(host, port)`，仅用于日志输出。
pub fn generate_sbatch_script(
    config: &SlurmConfig,
    workdir: &Path,
    endpoint: (&str, u16),
    exec_cmd: &str,
) -> String {
    let module_loads = config
        .modules
        .iter()
        .map(|m| format!("module load {}", m))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"#!/bin/bash
#SBATCH --partition {}
#SBATCH --nodes={}
#SBATCH --mem-per-cpu {}
#SBATCH --time {}
#SBATCH -c {}
#SBATCH -n {}
#SBATCH -J {}
#SBATCH -o slurm_logs/%x.out
#SBATCH -e slurm_logs/%x.err

set -euo pipefail

module purge 2>&1
{}
echo "Loaded modules"

cd "{}"
echo "PWD=$(pwd)"
echo "Socket endpoint: {}:{}"
echo "Running: {}"
{}

echo "Timings:"
sacct -o JobID,Submit,Start,End,CPUTime,State -j $SLURM_JOBID
"#,
        config.partition,
        config.nodes,
        config.mem_per_cpu,
        config.time_limit,
        config.cpus_per_task,
        config.ntasks,
        config.job_name,
        module_loads,
        workdir.display(),
        endpoint.0,
        endpoint.1,
        exec_cmd,
        exec_cmd,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbatch_script_contents() {
        let config = SlurmConfig {
            job_name: "slab".to_string(),
            modules: vec!["fhi-aims/240507".to_string(), "openmpi".to_string()],
            ..SlurmConfig::default()
        };
        let cmd = aims_exec_command(64, "aims.x");
        let script = generate_sbatch_script(
            &config,
            Path::new("/scratch/slab"),
            ("login1", 12345),
            &cmd,
        );

        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains("#SBATCH -J slab\n"));
        assert!(script.contains("#SBATCH --partition compute\n"));
        assert!(script.contains("module load fhi-aims/240507\nmodule load openmpi\n"));
        assert!(script.contains("cd \"/scratch/slab\""));
        assert!(script.contains("Socket endpoint: login1:12345"));
        assert!(script.contains("\nmpirun -np 64 aims.x > aims.out\n"));
    }

    #[test]
    fn test_no_modules() {
        let script = generate_sbatch_script(
            &SlurmConfig::default(),
            Path::new("."),
            ("localhost", 1),
            "true",
        );
        assert!(!script.contains("module load"));
    }
}
