//! 单槽提交邮箱 - 业务能力层
//!
//! 进程内唯一的共享可变状态：存放至多一份待提交载荷。
//! 写入方是编辑器侧的"准备提交"动作，有清空权限的读取方只有提交助手。
//! 覆盖写入是刻意的取舍：不做队列，后写者获胜，
//! 未被取走的旧载荷直接丢弃（已知限制）

use crate::error::{AppError, AppResult};
use crate::events::EditorBridge;
use crate::models::{Problem, SubmissionResponse};
use crate::services::{language, naming};
use std::fs;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// 单槽提交邮箱
///
/// 职责：
/// - 保存至多一份待提交载荷
/// - 任意请求可读取（peek）
/// - 仅提交助手可取走并清空（claim）
/// - 所有操作经同一把锁线性化
pub struct SubmissionMailbox {
    slot: Mutex<SubmissionResponse>,
    bridge: Arc<dyn EditorBridge>,
}

impl SubmissionMailbox {
    /// 创建空邮箱
    pub fn new(bridge: Arc<dyn EditorBridge>) -> Self {
        Self {
            slot: Mutex::new(SubmissionResponse::empty()),
            bridge,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SubmissionResponse> {
        // 锁中毒时恢复内部值继续服务
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 存入一份提交载荷
    ///
    /// 读取题目源文件并解析语言 ID；覆盖任何未取走的旧载荷
    ///
    /// # 参数
    /// - `problem`: 已落盘的题目（src_path 必须已填入）
    pub fn store(&self, problem: &Problem) -> AppResult<()> {
        let source_code = fs::read_to_string(&problem.src_path)
            .map_err(|source| AppError::filesystem(problem.src_path.clone(), source))?;
        let language_id = language::resolve_language_id(&problem.src_path);
        let problem_name = naming::short_problem_code(&problem.url);

        let payload =
            SubmissionResponse::ready(problem.url.clone(), problem_name, source_code, language_id);

        let mut slot = self.lock();
        if !slot.is_empty() {
            debug!("旧提交载荷未被取走，直接覆盖");
        }
        *slot = payload;
        drop(slot);

        info!("📨 提交载荷已就绪: {}", problem.url);
        Ok(())
    }

    /// 读取当前载荷，不修改槽位
    pub fn peek(&self) -> SubmissionResponse {
        self.lock().clone()
    }

    /// 读取载荷并按请求方身份决定是否清空
    ///
    /// 读取与清空在同一次加锁内完成，并发的 store/claim 之间
    /// 不会出现载荷被重复送达或未送达即丢失
    ///
    /// # 参数
    /// - `is_submission_helper`: 请求方是否为提交助手
    ///
    /// # 返回
    /// 清空判定之前的槽位内容
    pub fn claim(&self, is_submission_helper: bool) -> SubmissionResponse {
        let (payload, delivered) = {
            let mut slot = self.lock();
            let payload = slot.clone();
            let delivered = is_submission_helper && !slot.is_empty();
            if delivered {
                *slot = SubmissionResponse::empty();
            }
            (payload, delivered)
        };

        // 送达通知在锁外发出
        if delivered {
            self.bridge.on_submission_delivered();
        }
        payload
    }

    /// 仅执行清空判定（编辑器侧接口）
    ///
    /// 空槽位上的重复调用不会再次触发送达通知
    pub fn clear_if_claimed(&self, is_submission_helper: bool) {
        let _ = self.claim(is_submission_helper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random_id;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 记录通知次数的桥接桩
    #[derive(Default)]
    struct RecordingBridge {
        delivered: AtomicUsize,
    }

    impl EditorBridge for RecordingBridge {
        fn on_new_problem(&self, _problem: &Problem) {}

        fn on_submission_delivered(&self) {
            self.delivered.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn mailbox() -> (SubmissionMailbox, Arc<RecordingBridge>) {
        let bridge = Arc::new(RecordingBridge::default());
        (SubmissionMailbox::new(bridge.clone()), bridge)
    }

    fn stored_problem(source: &str) -> Problem {
        let path = std::env::temp_dir().join(format!("companion_src_{}.cpp", random_id()));
        fs::write(&path, source).expect("写入临时源文件失败");
        Problem {
            url: "https://codeforces.com/contest/1500/problem/A".to_string(),
            name: "A".to_string(),
            group: "Codeforces".to_string(),
            tests: vec![],
            src_path: path.display().to_string(),
        }
    }

    #[test]
    fn test_store_then_claim_then_empty() {
        let (mailbox, bridge) = mailbox();
        let problem = stored_problem("int main() {}");

        mailbox.store(&problem).expect("store 失败");
        let payload = mailbox.claim(true);
        assert!(!payload.is_empty());

        assert!(mailbox.peek().is_empty());
        assert_eq!(bridge.delivered.load(Ordering::SeqCst), 1);

        // 空槽位上的再次 claim 不重复通知
        let payload = mailbox.claim(true);
        assert!(payload.is_empty());
        assert_eq!(bridge.delivered.load(Ordering::SeqCst), 1);

        let _ = fs::remove_file(&problem.src_path);
    }

    #[test]
    fn test_non_helper_never_clears() {
        let (mailbox, bridge) = mailbox();
        let problem = stored_problem("int main() {}");
        mailbox.store(&problem).expect("store 失败");

        for _ in 0..5 {
            assert!(!mailbox.claim(false).is_empty());
        }
        assert!(!mailbox.peek().is_empty());
        assert_eq!(bridge.delivered.load(Ordering::SeqCst), 0);

        let _ = fs::remove_file(&problem.src_path);
    }

    #[test]
    fn test_double_store_overwrites() {
        // 刻意的有损行为：两次 store 之间无人取走时只保留后者
        let (mailbox, _bridge) = mailbox();
        let first = stored_problem("// first");
        let second = stored_problem("// second");

        mailbox.store(&first).expect("store 失败");
        mailbox.store(&second).expect("store 失败");

        match mailbox.claim(true) {
            SubmissionResponse::Ready(payload) => assert_eq!(payload.source_code, "// second"),
            SubmissionResponse::Empty { .. } => panic!("槽位不应为空"),
        }
        assert!(mailbox.peek().is_empty(), "第一份载荷已被覆盖，不可再取");

        let _ = fs::remove_file(&first.src_path);
        let _ = fs::remove_file(&second.src_path);
    }

    #[test]
    fn test_store_missing_source_keeps_slot() {
        let (mailbox, _bridge) = mailbox();
        let mut problem = stored_problem("int main() {}");
        mailbox.store(&problem).expect("store 失败");

        problem.src_path = "/no/such/file.cpp".to_string();
        let err = mailbox.store(&problem).expect_err("缺失源文件应报错");
        assert!(matches!(err, AppError::Filesystem { .. }));
        // 失败的 store 不得破坏已有载荷
        assert!(!mailbox.peek().is_empty());
    }

    #[test]
    fn test_stored_payload_contents() {
        let (mailbox, _bridge) = mailbox();
        let problem = stored_problem("int main() { return 0; }");
        mailbox.store(&problem).expect("store 失败");

        match mailbox.peek() {
            SubmissionResponse::Ready(payload) => {
                assert!(!payload.empty);
                assert_eq!(payload.url, problem.url);
                assert_eq!(payload.problem_name, "1500A");
                assert_eq!(payload.source_code, "int main() { return 0; }");
                assert_eq!(payload.language_id, "54");
            }
            SubmissionResponse::Empty { .. } => panic!("槽位不应为空"),
        }

        let _ = fs::remove_file(&problem.src_path);
    }
}
