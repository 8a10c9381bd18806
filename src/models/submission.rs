//! 提交载荷模型（邮箱槽位内容）

use serde::{Deserialize, Serialize};

/// 就绪的提交载荷
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub empty: bool,
    pub url: String,
    pub problem_name: String,
    pub source_code: String,
    pub language_id: String,
}

/// 提交助手轮询得到的响应载荷
///
/// 空载荷序列化为 `{"empty":true}`；就绪载荷带 url、题号、源码和语言 ID
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionResponse {
    /// 就绪：等待提交助手取走
    Ready(SubmitPayload),
    /// 空槽
    Empty { empty: bool },
}

impl SubmissionResponse {
    /// 空槽载荷
    pub fn empty() -> Self {
        SubmissionResponse::Empty { empty: true }
    }

    /// 就绪载荷
    pub fn ready(
        url: impl Into<String>,
        problem_name: impl Into<String>,
        source_code: impl Into<String>,
        language_id: impl Into<String>,
    ) -> Self {
        SubmissionResponse::Ready(SubmitPayload {
            empty: false,
            url: url.into(),
            problem_name: problem_name.into(),
            source_code: source_code.into(),
            language_id: language_id.into(),
        })
    }

    /// 槽位是否为空
    pub fn is_empty(&self) -> bool {
        matches!(self, SubmissionResponse::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_wire_shape() {
        let json = serde_json::to_string(&SubmissionResponse::empty()).expect("序列化失败");
        assert_eq!(json, r#"{"empty":true}"#);
    }

    #[test]
    fn test_ready_wire_shape_camel_case() {
        let response = SubmissionResponse::ready(
            "https://codeforces.com/contest/1500/problem/A",
            "1500A",
            "int main() {}",
            "54",
        );
        let json = serde_json::to_string(&response).expect("序列化失败");
        assert!(json.contains(r#""empty":false"#));
        assert!(json.contains(r#""problemName":"1500A""#));
        assert!(json.contains(r#""sourceCode":"int main() {}""#));
        assert!(json.contains(r#""languageId":"54""#));
    }

    #[test]
    fn test_round_trip_untagged() {
        let ready = SubmissionResponse::ready("u", "p", "s", "54");
        let json = serde_json::to_string(&ready).expect("序列化失败");
        let back: SubmissionResponse = serde_json::from_str(&json).expect("反序列化失败");
        assert_eq!(back, ready);

        let back: SubmissionResponse =
            serde_json::from_str(r#"{"empty":true}"#).expect("反序列化失败");
        assert!(back.is_empty());
    }
}
