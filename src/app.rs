//! 应用编排层
//!
//! 组装配置、邮箱、监听器，并提供编辑器侧动作入口

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::{EditorBridge, LoggingBridge};
use crate::models::Problem;
use crate::server::{AppState, CompanionServer};
use crate::services::SubmissionMailbox;
use anyhow::Result;
use std::fs;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    state: AppState,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        Self::with_bridge(config, Arc::new(LoggingBridge))
    }

    /// 指定编辑器事件接收方初始化（测试注入用）
    pub fn with_bridge(config: Config, bridge: Arc<dyn EditorBridge>) -> Result<Self> {
        fs::create_dir_all(&config.workspace_folder)?;
        let mailbox = Arc::new(SubmissionMailbox::new(bridge.clone()));
        let state = AppState {
            config: Arc::new(config),
            mailbox,
            bridge,
        };
        Ok(Self { state })
    }

    /// 编辑器侧动作：准备提交（读取源码并放入邮箱）
    pub fn prepare_submission(&self, problem: &Problem) -> AppResult<()> {
        self.state.mailbox.store(problem)
    }

    /// 监听器共享状态（测试用）
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// 运行监听器主循环
    ///
    /// 端口冲突不视为致命错误：本实例不提供服务，
    /// 先占住端口的实例继续工作
    pub async fn run(self) -> Result<()> {
        log_startup(&self.state.config);
        match CompanionServer::bind(self.state.clone()).await {
            Ok(server) => server.serve().await,
            Err(AppError::BindConflict { port, source }) => {
                warn!("⚠️ 端口 {} 已被占用（是否打开了多个编辑器窗口？）: {}", port, source);
                warn!("⚠️ 本实例不再接收题目推送，先启动的实例继续工作");
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ 监听器启动失败: {}", e);
                Ok(())
            }
        }
    }
}

/// 记录启动横幅
fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 题目伴侣服务启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📡 监听端口: {}", config.port);
    info!("📁 工作区目录: {}", config.workspace_folder);
    info!(
        "🗂️ 分类存放: {}",
        if config.enable_classification {
            "开启"
        } else {
            "关闭"
        }
    );
    info!("{}", "=".repeat(60));
}
