//! URL 分类服务 - 业务能力层
//!
//! 把题目 URL + group 标签映射为 (平台, 赛制, 题号) 三元组，
//! 供分类存放路径使用。纯函数，无外部状态

use crate::models::{Classification, Platform};

/// 路径段匹配规则：(标记段, 题号相对偏移)
type Rule = (&'static str, usize);

/// Codeforces 规则表：problemset 的题号隔着一个 "problem" 字面段
const CODEFORCES_RULES: &[Rule] = &[("contest", 1), ("problemset", 2), ("gym", 1)];

/// AtCoder 规则表
const ATCODER_RULES: &[Rule] = &[("contests", 1)];

/// 分类题目 URL
///
/// # 参数
/// - `url`: 题目完整 URL
/// - `group`: 浏览器插件给出的比赛分组标签（如 "Codeforces - Div2"）
///
/// # 返回
/// 未识别平台直接返回空分类；URL 截断时题号为空串，绝不 panic。
/// 扫描不短路：同一 URL 出现多个标记段时，后出现者覆盖先出现者
pub fn classify(url: &str, group: &str) -> Classification {
    let platform = Platform::from_group(group);
    let rules = match platform {
        Platform::Codeforces => CODEFORCES_RULES,
        Platform::Atcoder => ATCODER_RULES,
        Platform::Unknown => return Classification::unknown(),
    };

    let parts: Vec<&str> = url.split('/').collect();
    let mut contest_type = String::new();
    let mut problem_id = String::new();

    for (i, part) in parts.iter().enumerate() {
        for &(marker, offset) in rules {
            if *part == marker {
                contest_type = marker.to_string();
                problem_id = parts.get(i + offset).copied().unwrap_or("").to_string();
            }
        }
    }

    Classification {
        platform,
        contest_type,
        problem_id,
    }
}
