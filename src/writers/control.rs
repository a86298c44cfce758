//! # FHI-aims control.in 写出
//!
//! ## control.in 格式说明
//! ```text
//! #===============================================================================
//! # FHI-aims file: control.in
//! #===============================================================================
//! xc                                 pbe
//! relativistic                       atomic_zora scalar
//! compute_forces                     .true.
//! k_grid                             4 4 4
//! ```
//!
//! 只写出全局关键字部分；species 基组由 FHI-aims 的 species_defaults 提供。
//!
//! ## 依赖关系
//! - 被 `writers/mod.rs` 使用
//! - 使用 `models/calculator.rs`

use crate::error::{AimsError, Result};
use crate::models::AimsCalculator;
use std::fs;
use std::path::{Path, PathBuf};

const KEY_WIDTH: usize = 35;
const CONTROL_FILE: &str = "control.in";

/// 将计算器配置转换为 control.in 字符串
///
/// 存在但未赋值的关键字（如未提供的 `k_grid`）会导致 `IncompleteOption`。
pub fn to_control_string(calc: &AimsCalculator) -> Result<String> {
    let rule = format!("#{}", "=".repeat(79));

    let mut result = String::new();
    result.push_str(&rule);
    result.push('\n');
    result.push_str("# FHI-aims file: control.in\n");
    result.push_str("# Generated by aimscalc\n");
    result.push_str(&rule);
    result.push('\n');

    for (key, value) in calc.iter() {
        if value.is_unset() {
            return Err(AimsError::IncompleteOption {
                key: key.to_string(),
            });
        }
        result.push_str(&format!("{:<width$}{}\n", key, value, width = KEY_WIDTH));
    }

    result.push_str(&rule);
    result.push('\n');

    Ok(result)
}

/// 在 `dir` 下写出 control.in，返回文件路径
pub fn write_control_file(calc: &AimsCalculator, dir: &Path) -> Result<PathBuf> {
    let content = to_control_string(calc)?;

    fs::create_dir_all(dir).map_err(|e| AimsError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let path = dir.join(CONTROL_FILE);
    fs::write(&path, content).map_err(|e| AimsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::get_aims_calculator;
    use crate::models::OptionValue;

    #[test]
    fn test_control_string_bulk() {
        let calc = get_aims_calculator(3, Some([4, 4, 4]));
        let text = to_control_string(&calc).unwrap();

        let body: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(
            body,
            vec![
                format!("{:<35}pbe", "xc"),
                format!("{:<35}none", "spin"),
                format!("{:<35}atomic_zora scalar", "relativistic"),
                format!("{:<35}.true.", "compute_forces"),
                format!("{:<35}4 4 4", "k_grid"),
            ]
        );
    }

    #[test]
    fn test_control_string_socket_directive() {
        let mut calc = get_aims_calculator(2, Some([3, 3, 1]));
        calc.set("use_pimd_wrapper", OptionValue::Endpoint("login1".into(), 12345));
        let text = to_control_string(&calc).unwrap();

        assert!(text.contains(&format!("{:<35}.true.\n", "use_dipole_correction")));
        assert!(text.contains(&format!("{:<35}login1 12345\n", "use_pimd_wrapper")));
    }

    #[test]
    fn test_unset_option_rejected() {
        let calc = get_aims_calculator(2, None);
        match to_control_string(&calc) {
            Err(AimsError::IncompleteOption { key }) => assert_eq!(key, "k_grid"),
            other => panic!("expected IncompleteOption, got {:?}", other),
        }
    }

    #[test]
    fn test_write_control_file() {
        let dir = std::env::temp_dir().join(format!("aimscalc-control-{}", std::process::id()));
        let calc = get_aims_calculator(0, None);

        let path = write_control_file(&calc, &dir).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_control_string(&calc).unwrap());
        assert_eq!(path.file_name().unwrap(), "control.in");

        fs::remove_dir_all(&dir).ok();
    }
}
