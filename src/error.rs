//! 错误类型定义
//!
//! 按请求隔离：除监听器自身无法创建外，任何单次请求的失败都不影响
//! 其他请求和监听器本身

use thiserror::Error;

/// 子系统错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求体无法解析为题目载荷（坏载荷只丢弃本次连接）
    #[error("题目载荷解析失败: {source}")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },

    /// 端口被占用（通常是打开了第二个编辑器窗口），非致命
    #[error("端口 {port} 绑定失败: {source}")]
    BindConflict {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// 文件系统操作失败，只中止当前题目的落盘
    #[error("文件操作失败 ({path}): {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 题目元数据编码失败
    #[error("题目元数据编码失败: {source}")]
    EncodeFailed {
        #[source]
        source: serde_json::Error,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl AppError {
    /// 创建文件系统错误
    pub fn filesystem(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// 子系统结果类型
pub type AppResult<T> = Result<T, AppError>;
