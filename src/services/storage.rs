//! 题目元数据持久化 - 业务能力层
//!
//! 把补全后的题目（含测试用例）写成源文件旁隐藏目录里的 .prob 文件，
//! 供编辑器侧的评测视图读取

use crate::error::{AppError, AppResult};
use crate::models::Problem;
use std::fs;
use std::path::{Path, PathBuf};

/// 元数据文件所在的隐藏目录名
const PROB_DIR: &str = ".companion";

/// 题目元数据文件路径（与源文件同级的隐藏目录）
pub fn prob_path(src_path: &Path) -> PathBuf {
    let dir = src_path.parent().unwrap_or(Path::new(".")).join(PROB_DIR);
    let file = format!(
        "{}.prob",
        src_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("problem")
    );
    dir.join(file)
}

/// 持久化题目元数据
///
/// # 参数
/// - `src_path`: 题目源文件路径
/// - `problem`: 补全后的题目
pub fn persist_problem(src_path: &Path, problem: &Problem) -> AppResult<()> {
    let path = prob_path(src_path);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|source| AppError::filesystem(dir.display().to_string(), source))?;
    }
    let json = serde_json::to_string_pretty(problem)
        .map_err(|source| AppError::EncodeFailed { source })?;
    fs::write(&path, json)
        .map_err(|source| AppError::filesystem(path.display().to_string(), source))?;
    Ok(())
}
