//! 新题目处理流程
//!
//! 浏览器插件推送的题目从这里落盘：补全测试 ID、分类、推导路径、
//! 写入模板、持久化元数据，最后通知编辑器侧

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::EditorBridge;
use crate::models::{Problem, ProblemPayload};
use crate::services::{language, naming, storage};
use crate::utils::url_hostname;
use std::fs;
use tracing::{info, warn};

/// 处理一道新推送的题目
///
/// # 参数
/// - `payload`: 已解码的推送载荷
/// - `config`: 程序配置
/// - `bridge`: 编辑器侧事件接收方
///
/// # 返回
/// 文件系统失败只中止本题，不影响监听器和其他在途请求
pub fn handle_new_problem(
    payload: ProblemPayload,
    config: &Config,
    bridge: &dyn EditorBridge,
) -> AppResult<Problem> {
    let mut problem = Problem::from_payload(payload);

    // Kattis 题目名取 URL 末段
    if url_hostname(&problem.url) == Some("open.kattis.com") {
        if let Some(last) = problem.url.split('/').filter(|s| !s.is_empty()).next_back() {
            problem.name = last.to_string();
        }
    }

    let ext = language::default_extension(&config.default_language);
    let file_name = naming::derive_file_name(&problem, ext, config);
    let src_path =
        naming::derive_storage_path(&problem, &file_name, &config.workspace_folder, config)?;
    problem.src_path = src_path.display().to_string();

    if !src_path.exists() {
        fs::write(&src_path, seed_contents(config))
            .map_err(|source| AppError::filesystem(problem.src_path.clone(), source))?;
    }

    storage::persist_problem(&src_path, &problem)?;

    info!("📋 新题目已落盘: {} → {}", problem.name, problem.src_path);
    bridge.on_new_problem(&problem);
    Ok(problem)
}

/// 新源文件的初始内容：配置了模板且模板可读时返回模板内容
fn seed_contents(config: &Config) -> String {
    let Some(template) = config.template_file.as_deref() else {
        return String::new();
    };
    match fs::read_to_string(template) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("⚠️ 模板文件读取失败 ({}): {}", template, e);
            String::new()
        }
    }
}
