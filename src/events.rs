//! 编辑器侧事件桥接
//!
//! 编辑器 UI 是外部协作方，核心只负责在关键节点发出通知：
//! 新题目已落盘、提交载荷已被提交助手取走

use crate::models::Problem;
use tracing::info;

/// 编辑器事件接收方
pub trait EditorBridge: Send + Sync {
    /// 新题目已落盘，等待编辑器打开
    fn on_new_problem(&self, problem: &Problem);

    /// 提交载荷已被提交助手取走
    fn on_submission_delivered(&self);
}

/// 默认实现：仅记录日志
pub struct LoggingBridge;

impl EditorBridge for LoggingBridge {
    fn on_new_problem(&self, problem: &Problem) {
        info!("📋 新题目: {} ({})", problem.name, problem.src_path);
    }

    fn on_submission_delivered(&self) {
        info!("✅ 提交载荷已送达提交助手");
    }
}
