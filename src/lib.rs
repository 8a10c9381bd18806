//! # Problem Companion
//!
//! 竞技编程题目伴侣服务：接收浏览器插件推送的题目元数据并落盘到工作区，
//! 同时通过单槽邮箱把准备好的解答源码移交给独立的提交助手
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据模型层（Models）
//! - `models/` - 题目、提交载荷、平台分类三元组
//!
//! ### ② 业务能力层（Services）
//! - `services/classifier` - URL → (平台, 赛制, 题号) 分类能力
//! - `services/naming` - 文件名与存放路径推导能力
//! - `services/mailbox` - 单槽提交邮箱（覆盖写入、取走即清空）
//! - `services/language` - 语言与扩展名映射
//! - `services/storage` - 题目元数据持久化
//!
//! ### ③ 流程层（Processing）
//! - `processing` - 一道新题目从解码到落盘通知的完整流程
//!
//! ### ④ 编排层（Server / App）
//! - `server` - 回环摄入监听器（单端点，任意方法一视同仁）
//! - `app` - 组装配置、邮箱、监听器，提供编辑器侧动作入口
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod models;
pub mod processing;
pub mod server;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use events::{EditorBridge, LoggingBridge};
pub use models::{Classification, Platform, Problem, ProblemPayload, SubmissionResponse};
pub use server::{router, AppState, CompanionServer};
pub use services::SubmissionMailbox;
