//! 通用工具函数

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// 生成进程内唯一的测试用例 ID
///
/// 纳秒时间戳叠加自增计数器，同一纳秒内的并发调用也不会重复
pub fn random_id() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos.wrapping_add(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// 提取 URL 的主机名（不依赖完整的 URL 解析）
///
/// # 参数
/// - `url`: 完整 URL 或裸主机名
///
/// # 返回
/// 去掉端口后的主机名；空字符串返回 None
pub fn url_hostname(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.rsplit('@').next()?;
    let host = host.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_id_unique() {
        let ids: Vec<u64> = (0..100).map(|_| random_id()).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len(), "ID 不应重复");
    }

    #[test]
    fn test_url_hostname() {
        assert_eq!(
            url_hostname("https://codeforces.com/contest/1500/problem/A"),
            Some("codeforces.com")
        );
        assert_eq!(
            url_hostname("https://open.kattis.com:443/problems/hello"),
            Some("open.kattis.com")
        );
        assert_eq!(url_hostname("open.kattis.com/problems/hello"), Some("open.kattis.com"));
        assert_eq!(url_hostname(""), None);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
    }
}
