//! # 本机主机名解析
//!
//! ASE 与 FHI-aims 可能运行在不同节点（登录节点 / 计算节点），
//! 因此即使在同一台机器上也显式使用主机名作为 socket 地址。
//!
//! 优先调用系统 `hostname` 命令；命令不存在或执行失败时回退到
//! `/proc/sys/kernel/hostname`。
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs` 使用

use crate::error::{AimsError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

const HOSTNAME_COMMAND: &str = "hostname";
const KERNEL_HOSTNAME: &str = "/proc/sys/kernel/hostname";

/// 解析本机主机名
pub fn resolve_hostname() -> Result<String> {
    resolve_hostname_with(HOSTNAME_COMMAND, Path::new(KERNEL_HOSTNAME))
}

/// 使用指定命令解析主机名，命令不存在或失败时读取 `kernel_file`
pub fn resolve_hostname_with(command: &str, kernel_file: &Path) -> Result<String> {
    match Command::new(command).output() {
        Ok(out) if out.status.success() => {
            non_empty(String::from_utf8_lossy(&out.stdout).trim(), command)
        }
        Ok(out) => read_kernel_hostname(kernel_file).map_err(|_| AimsError::CommandFailed {
            command: command.to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            read_kernel_hostname(kernel_file).map_err(|_| AimsError::CommandNotFound {
                command: command.to_string(),
            })
        }
        Err(e) => Err(AimsError::HostnameResolution {
            reason: e.to_string(),
        }),
    }
}

fn read_kernel_hostname(kernel_file: &Path) -> Result<String> {
    let content =
        fs::read_to_string(kernel_file).map_err(|e| AimsError::HostnameResolution {
            reason: format!("{}: {}", kernel_file.display(), e),
        })?;
    non_empty(content.trim(), &kernel_file.display().to_string())
}

fn non_empty(name: &str, origin: &str) -> Result<String> {
    if name.is_empty() {
        return Err(AimsError::HostnameResolution {
            reason: format!("{} returned an empty name", origin),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hostname_is_stable() {
        let first = resolve_hostname().unwrap();
        let second = resolve_hostname().unwrap();
        assert!(!first.is_empty());
        assert!(!first.contains('\n'));
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_command_reads_kernel_file() {
        let expected = fs::read_to_string(KERNEL_HOSTNAME).unwrap().trim().to_string();
        let name =
            resolve_hostname_with("aimscalc-no-such-command", Path::new(KERNEL_HOSTNAME)).unwrap();
        assert_eq!(name, expected);
    }

    #[test]
    fn test_failing_command_reads_kernel_file() {
        let expected = fs::read_to_string(KERNEL_HOSTNAME).unwrap().trim().to_string();
        let name = resolve_hostname_with("false", Path::new(KERNEL_HOSTNAME)).unwrap();
        assert_eq!(name, expected);
    }

    #[test]
    fn test_no_source_available() {
        let missing = Path::new("/nonexistent/aimscalc/hostname");

        assert!(matches!(
            resolve_hostname_with("aimscalc-no-such-command", missing),
            Err(AimsError::CommandNotFound { .. })
        ));
        assert!(matches!(
            resolve_hostname_with("false", missing),
            Err(AimsError::CommandFailed { .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            non_empty("", "test"),
            Err(AimsError::HostnameResolution { .. })
        ));
        assert_eq!(non_empty("node1", "test").unwrap(), "node1");
    }
}
