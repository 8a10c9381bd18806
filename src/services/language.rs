//! 语言与扩展名映射 - 业务能力层
//!
//! 三张静态表：语言 → 扩展名、扩展名 → 语言、语言 → 判题提交语言 ID

use phf::phf_map;
use std::path::Path;

/// 语言 → 源文件扩展名
static LANGUAGE_EXTENSIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "c" => "c",
    "cpp" => "cpp",
    "python" => "py",
    "rust" => "rs",
    "java" => "java",
    "js" => "js",
    "go" => "go",
    "hs" => "hs",
    "ruby" => "rb",
    "csharp" => "cs",
};

/// 源文件扩展名 → 语言
static EXTENSION_LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "c" => "c",
    "cpp" => "cpp",
    "cc" => "cpp",
    "cxx" => "cpp",
    "py" => "python",
    "rs" => "rust",
    "java" => "java",
    "js" => "js",
    "go" => "go",
    "hs" => "hs",
    "rb" => "ruby",
    "cs" => "csharp",
};

/// 语言 → 默认判题提交语言 ID
static SUBMIT_LANGUAGE_IDS: phf::Map<&'static str, &'static str> = phf_map! {
    "c" => "43",
    "cpp" => "54",
    "python" => "31",
    "rust" => "75",
    "java" => "60",
    "js" => "34",
    "go" => "32",
    "hs" => "12",
    "ruby" => "67",
    "csharp" => "79",
};

/// 取语言的默认扩展名，未知语言退回 cpp
pub fn default_extension(language: &str) -> &'static str {
    LANGUAGE_EXTENSIONS.get(language).copied().unwrap_or("cpp")
}

/// 从源文件路径解析判题提交语言 ID
///
/// # 返回
/// 未识别的扩展名返回空串，由提交助手决定是否拒绝
pub fn resolve_language_id(src_path: &str) -> String {
    let ext = Path::new(src_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    EXTENSION_LANGUAGES
        .get(ext)
        .and_then(|lang| SUBMIT_LANGUAGE_IDS.get(lang))
        .map(|id| (*id).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extension() {
        assert_eq!(default_extension("python"), "py");
        assert_eq!(default_extension("cpp"), "cpp");
        assert_eq!(default_extension("klingon"), "cpp");
    }

    #[test]
    fn test_resolve_language_id() {
        assert_eq!(resolve_language_id("problems/1500A.cpp"), "54");
        assert_eq!(resolve_language_id("problems/1500A.cc"), "54");
        assert_eq!(resolve_language_id("problems/abc100_a.py"), "31");
        assert_eq!(resolve_language_id("problems/main.zig"), "");
        assert_eq!(resolve_language_id("no_extension"), "");
    }
}
