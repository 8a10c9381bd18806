//! 题目数据模型
//!
//! `ProblemPayload` 是浏览器插件推送的原始数据；`Problem` 是本地补全
//! （测试用例 ID、源文件路径）之后的形态

use crate::error::AppError;
use crate::utils::random_id;
use serde::{Deserialize, Serialize};

/// 推送载荷中的单个测试用例
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestPayload {
    pub input: String,
    pub output: String,
}

/// 浏览器插件推送的题目载荷
///
/// 必填字段缺失或类型不符整体视为坏载荷，绝不产生半填充对象；
/// 插件附带的额外字段被忽略
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemPayload {
    pub url: String,
    pub name: String,
    pub group: String,
    pub tests: Vec<TestPayload>,
    #[serde(default)]
    pub time_limit: Option<u64>,
    #[serde(default)]
    pub memory_limit: Option<u64>,
    #[serde(default)]
    pub interactive: Option<bool>,
}

impl ProblemPayload {
    /// 解析推送的原始字节
    pub fn decode(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(bytes).map_err(|source| AppError::MalformedPayload { source })
    }
}

/// 带本地 ID 的测试用例
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestCase {
    pub id: u64,
    pub input: String,
    pub output: String,
}

/// 本地补全后的题目
///
/// 身份由 url 决定；src_path 是唯一在解码后由本地流程填入的字段
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub url: String,
    pub name: String,
    pub group: String,
    pub tests: Vec<TestCase>,
    /// 源文件路径，由路径推导流程填入
    pub src_path: String,
}

impl Problem {
    /// 由推送载荷构造题目，为每个测试用例分配本地 ID
    pub fn from_payload(payload: ProblemPayload) -> Self {
        let tests = payload
            .tests
            .into_iter()
            .map(|t| TestCase {
                id: random_id(),
                input: t.input,
                output: t.output,
            })
            .collect();
        Self {
            url: payload.url,
            name: payload.name,
            group: payload.group,
            tests,
            src_path: String::new(),
        }
    }
}
