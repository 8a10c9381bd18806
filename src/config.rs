//! 程序配置模块
//!
//! 配置来源按优先级从低到高：内置默认值 → companion.toml → 环境变量

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// 默认配置文件名（相对当前工作目录）
const CONFIG_FILE: &str = "companion.toml";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听端口（浏览器插件默认向此端口推送）
    pub port: u16,
    /// 题目工作区目录
    pub workspace_folder: String,
    /// 是否按 平台/赛制/题号 分类存放
    pub enable_classification: bool,
    /// 是否对竞赛判题域名使用短文件名（如 1500A.cpp）
    pub use_short_codeforces_name: bool,
    /// 允许使用短文件名的域名
    pub short_name_hosts: Vec<String>,
    /// 默认语言（决定新建源文件的扩展名）
    pub default_language: String,
    /// 模板文件路径（可选，新建源文件时写入其内容）
    pub template_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 27121,
            workspace_folder: "problems".to_string(),
            enable_classification: true,
            use_short_codeforces_name: true,
            short_name_hosts: vec![
                "codeforces.com".to_string(),
                "www.codeforces.com".to_string(),
            ],
            default_language: "cpp".to_string(),
            template_file: None,
        }
    }
}

/// companion.toml 的部分覆盖结构（字段全部可选）
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    port: Option<u16>,
    workspace_folder: Option<String>,
    enable_classification: Option<bool>,
    use_short_codeforces_name: Option<bool>,
    short_name_hosts: Option<Vec<String>>,
    default_language: Option<String>,
    template_file: Option<String>,
}

impl Config {
    /// 加载配置：默认值 + 配置文件 + 环境变量
    pub fn load() -> Self {
        let mut config = Self::default();
        config.merge_file(CONFIG_FILE);
        config.merge_env();
        config
    }

    /// 合并配置文件（不存在则跳过，解析失败记警告并继续）
    fn merge_file(&mut self, path: &str) {
        if !Path::new(path).exists() {
            return;
        }
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| toml::from_str::<ConfigFile>(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(file) => {
                if let Some(v) = file.port {
                    self.port = v;
                }
                if let Some(v) = file.workspace_folder {
                    self.workspace_folder = v;
                }
                if let Some(v) = file.enable_classification {
                    self.enable_classification = v;
                }
                if let Some(v) = file.use_short_codeforces_name {
                    self.use_short_codeforces_name = v;
                }
                if let Some(v) = file.short_name_hosts {
                    self.short_name_hosts = v;
                }
                if let Some(v) = file.default_language {
                    self.default_language = v;
                }
                if file.template_file.is_some() {
                    self.template_file = file.template_file;
                }
            }
            Err(e) => warn!("⚠️ 配置文件解析失败 ({}): {}", path, e),
        }
    }

    /// 合并环境变量覆盖
    fn merge_env(&mut self) {
        self.port = std::env::var("COMPANION_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.port);
        self.workspace_folder =
            std::env::var("COMPANION_WORKSPACE").unwrap_or(self.workspace_folder.clone());
        self.enable_classification = std::env::var("COMPANION_CLASSIFICATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.enable_classification);
        self.use_short_codeforces_name = std::env::var("COMPANION_SHORT_NAMES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.use_short_codeforces_name);
        self.default_language =
            std::env::var("COMPANION_LANGUAGE").unwrap_or(self.default_language.clone());
        if let Ok(v) = std::env::var("COMPANION_TEMPLATE") {
            self.template_file = Some(v);
        }
    }
}
