//! 文件名与存放路径推导 - 业务能力层
//!
//! 文件名优先使用竞赛判题域名的短题号（如 1500A.cpp），
//! 否则对题目显示名做词切分后用下划线连接

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Problem;
use crate::services::classifier;
use crate::utils::url_hostname;
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use unicode_segmentation::UnicodeSegmentation;

/// 从 URL 推出短题号
///
/// 含 `contest` 段时取倒数第三段 + 末段（contest/1500/problem/A → "1500A"），
/// 否则取倒数第二段 + 末段（problemset/problem/4/A → "4A"）。
/// gym URL 走的是后一分支，产出 "problemB" 这样的短号（沿用既有行为）
pub fn short_problem_code(url: &str) -> String {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 3 {
        return parts.last().copied().unwrap_or("").to_string();
    }
    if parts.iter().any(|p| *p == "contest") {
        format!("{}{}", parts[parts.len() - 3], parts[parts.len() - 1])
    } else {
        format!("{}{}", parts[parts.len() - 2], parts[parts.len() - 1])
    }
}

/// 纯标点名字的兜底：把连续非词字符压成单个下划线
fn underscore_fallback(name: &str) -> String {
    if let Ok(re) = Regex::new(r"\W+") {
        re.replace_all(name, "_").into_owned()
    } else {
        name.to_string()
    }
}

/// 推导题目源文件名
///
/// # 参数
/// - `problem`: 题目
/// - `ext`: 文件扩展名（不含点）
/// - `config`: 决定是否启用短文件名及适用域名
///
/// # 返回
/// 不含路径分隔符的文件名；相同输入恒产出相同结果
pub fn derive_file_name(problem: &Problem, ext: &str, config: &Config) -> String {
    let host = url_hostname(&problem.url).unwrap_or("");
    if config.use_short_codeforces_name && config.short_name_hosts.iter().any(|h| h == host) {
        return format!("{}.{}", short_problem_code(&problem.url), ext);
    }

    let words: Vec<&str> = problem.name.unicode_words().collect();
    let stem = if words.is_empty() {
        underscore_fallback(&problem.name)
    } else {
        words.join("_")
    };
    format!("{}.{}", stem, ext)
}

/// 推导题目的存放路径，按需创建分类目录链
///
/// 分类关闭时为 `workspace/<file_name>`；开启时为
/// `workspace/<平台>/<赛制>/<题号>/<file_name>`，空分类段自动塌缩。
/// 目录创建是幂等的，已存在不算错误
pub fn derive_storage_path(
    problem: &Problem,
    file_name: &str,
    workspace_root: &str,
    config: &Config,
) -> AppResult<PathBuf> {
    let mut dir = PathBuf::from(workspace_root);
    if config.enable_classification {
        let info = classifier::classify(&problem.url, &problem.group);
        for segment in [
            info.platform.name(),
            info.contest_type.as_str(),
            info.problem_id.as_str(),
        ] {
            if !segment.is_empty() {
                dir.push(segment);
            }
        }
    }
    fs::create_dir_all(&dir)
        .map_err(|source| AppError::filesystem(dir.display().to_string(), source))?;
    Ok(dir.join(file_name))
}
