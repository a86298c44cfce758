//! # sockets 命令实现
//!
//! 构建 i-PI socket 封装，输出设置并可写出 control.in 与 sbatch 脚本。
//!
//! ## 功能
//! - 未指定 `--host` 时解析本机主机名
//! - 写出带 `use_pimd_wrapper` 的 control.in
//! - 可选生成计算节点上的 sbatch 脚本
//!
//! ## 依赖关系
//! - 使用 `cli/sockets.rs` 定义的参数
//! - 使用 `calculator/mod.rs`, `writers/control.rs`, `utils/slurm.rs`, `utils/output.rs`

use super::{print_option_table, warn_missing_k_grid};
use crate::calculator::{get_aims_and_sockets_calculator, SocketOptions};
use crate::cli::sockets::SocketsArgs;
use crate::error::{AimsError, Result};
use crate::utils::output;
use crate::utils::slurm::{aims_exec_command, generate_sbatch_script, SlurmConfig};
use crate::writers::control;

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 sockets 命令
pub fn execute(args: SocketsArgs) -> Result<()> {
    let options = SocketOptions {
        port: args.port,
        host: args.host.clone(),
        logfile: args.logfile.clone(),
    };

    if options.host.is_none() && !args.calc.json {
        output::print_info("No --host given, using this machine's hostname");
    }

    let (socket_calc, fhi_calc) =
        get_aims_and_sockets_calculator(args.calc.dimensions, args.calc.k_grid, &options)?;

    let (host, port) = socket_calc
        .endpoint()
        .map(|(h, p)| (h.to_string(), p))
        .ok_or_else(|| AimsError::InvalidArgument("missing socket endpoint".to_string()))?;

    if args.calc.json {
        println!("{}", serde_json::to_string_pretty(&socket_calc)?);
    } else {
        output::print_header(&format!(
            "FHI-aims + i-PI Sockets (dimensions = {})",
            args.calc.dimensions
        ));
        output::print_info(&format!("Socket endpoint: {}:{}", host, port));
        output::print_info(&format!("Socket log: {}", socket_calc.log_path().display()));
        print_option_table(&fhi_calc);
        warn_missing_k_grid(&fhi_calc);
    }

    let job_dir = args
        .calc
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    if args.calc.output_dir.is_some() || args.sbatch {
        let path = control::write_control_file(&fhi_calc, &job_dir)?;
        if !args.calc.json {
            output::print_written("control.in", &path.display().to_string());
        }
    }

    if args.sbatch {
        let path = write_sbatch(&args, &job_dir, (host.as_str(), port))?;
        if !args.calc.json {
            output::print_written("submit.sbatch", &path.display().to_string());
        }
    }

    if !args.calc.json {
        output::print_separator();
        output::print_done("Start the ASE driver before launching FHI-aims");
    }

    Ok(())
}

/// 生成 sbatch 脚本
fn write_sbatch(args: &SocketsArgs, job_dir: &Path, endpoint: (&str, u16)) -> Result<PathBuf> {
    let modules: Vec<String> = args
        .modules
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let config = SlurmConfig {
        job_name: args.job_name.clone(),
        partition: args.partition.clone(),
        nodes: args.nodes,
        ntasks: args.ntasks,
        cpus_per_task: args.cpus_per_task,
        mem_per_cpu: args.mem_per_cpu.clone(),
        time_limit: args.time.clone(),
        modules,
    };

    // 创建 slurm_logs 目录
    fs::create_dir_all(job_dir.join("slurm_logs")).ok();

    let exec_cmd = aims_exec_command(args.mpi_processes(), &args.aims_exec);
    let sbatch_content = generate_sbatch_script(&config, job_dir, endpoint, &exec_cmd);
    let sbatch_path = job_dir.join("submit.sbatch");

    fs::write(&sbatch_path, sbatch_content).map_err(|e| AimsError::FileWriteError {
        path: sbatch_path.display().to_string(),
        source: e,
    })?;

    Ok(sbatch_path)
}
