//! 平台与分类模型

use serde::{Deserialize, Serialize};

/// 判题平台
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Codeforces,
    Atcoder,
    /// group 标签未命中任何已知平台
    Unknown,
}

impl Platform {
    /// 按 group 匹配顺序排列的已知平台
    pub const KNOWN: &'static [Platform] = &[Platform::Codeforces, Platform::Atcoder];

    /// 平台目录名（Unknown 为空串）
    pub fn name(self) -> &'static str {
        match self {
            Platform::Codeforces => "codeforces",
            Platform::Atcoder => "atcoder",
            Platform::Unknown => "",
        }
    }

    /// 从 group 标签解析平台
    ///
    /// 取第一个 `-` 分段，去空白并转小写后依序匹配
    pub fn from_group(group: &str) -> Self {
        let key = group.split('-').next().unwrap_or("").trim().to_lowercase();
        Self::KNOWN
            .iter()
            .copied()
            .find(|p| p.name() == key)
            .unwrap_or(Platform::Unknown)
    }
}

/// 题目分类三元组，由 URL 和 group 即时推导，不单独持久化
///
/// 不变量：platform 为 Unknown 时 contest_type 与 problem_id 均为空串
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub platform: Platform,
    pub contest_type: String,
    pub problem_id: String,
}

impl Classification {
    /// 未识别平台的空分类
    pub fn unknown() -> Self {
        Self {
            platform: Platform::Unknown,
            contest_type: String::new(),
            problem_id: String::new(),
        }
    }
}
