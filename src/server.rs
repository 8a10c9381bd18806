//! 摄入监听器 - 本地回环服务
//!
//! 浏览器插件向固定端口推送题目；提交助手带 `cph-submit` 头轮询
//! 同一端点取走提交载荷。单端点，所有方法和路径一视同仁

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::EditorBridge;
use crate::models::{ProblemPayload, SubmissionResponse};
use crate::processing;
use crate::services::SubmissionMailbox;
use crate::utils::truncate_text;
use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// 提交助手的请求标识头
const SUBMIT_HEADER: &str = "cph-submit";

/// 监听器共享状态
///
/// 邮箱作为显式句柄注入，监听器和编辑器侧动作共用同一份
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub mailbox: Arc<SubmissionMailbox>,
    pub bridge: Arc<dyn EditorBridge>,
}

/// 摄入监听器
pub struct CompanionServer {
    listener: TcpListener,
    router: Router,
}

impl CompanionServer {
    /// 绑定回环端口
    ///
    /// 端口被占用（通常是第二个编辑器窗口）返回 BindConflict，
    /// 由调用方降级为用户可见的警告而不是崩溃
    pub async fn bind(state: AppState) -> AppResult<Self> {
        let port = state.config.port;
        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .map_err(|source| AppError::BindConflict { port, source })?;
        info!("🚀 本地监听器已启动: 127.0.0.1:{}", port);
        Ok(Self {
            listener,
            router: router(state),
        })
    }

    /// 实际绑定到的端口（测试用 0 端口时由系统分配）
    pub fn local_port(&self) -> Option<u16> {
        self.listener.local_addr().ok().map(|a| a.port())
    }

    /// 持续服务直至进程结束
    pub async fn serve(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.router)
            .await
            .context("监听器意外退出")?;
        Ok(())
    }
}

/// 构建单端点路由：任意方法、任意路径都进同一个处理函数
pub fn router(state: AppState) -> Router {
    Router::new().fallback(companion_handler).with_state(state)
}

/// 唯一的请求处理函数
///
/// 响应体恒为邮箱的当前载荷，与请求体解析成败无关；
/// 坏载荷只记日志并丢弃，监听器继续服务后续连接
async fn companion_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<SubmissionResponse> {
    let is_helper = headers
        .get(SUBMIT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "true")
        .unwrap_or(false);

    // 读取与清空判定在邮箱内一次加锁完成，保证响应内容与清空动作一致
    let response = state.mailbox.claim(is_helper);

    if body.is_empty() {
        debug!("收到空请求体（提交助手轮询）");
    } else {
        match ProblemPayload::decode(&body) {
            Ok(payload) => {
                info!("📥 收到题目推送: {}", payload.url);
                let config = state.config.clone();
                let bridge = state.bridge.clone();
                // 落盘是同步文件操作，放到阻塞线程池，失败只记日志
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = processing::handle_new_problem(payload, &config, bridge.as_ref())
                    {
                        error!("题目处理失败: {}", e);
                    }
                });
            }
            Err(e) => {
                error!(
                    "坏载荷已丢弃: {} | 内容: {}",
                    e,
                    truncate_text(&String::from_utf8_lossy(&body), 120)
                );
            }
        }
    }

    Json(response)
}
