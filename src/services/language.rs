//! 语言代码工具
//!
//! 页面报告的语言标签形如 `en`、`fr-FR`，统一规范化为小写
//! 主子标签；未知语言用 `und` 表示，显示名为 "Unknown language"。

use isolang::Language;

/// 未知语言的占位代码
pub const UNKNOWN_LANGUAGE: &str = "und";

/// 把语言标签规范化为小写主子标签
///
/// 空白或无内容的标签规范化为 `und`。
pub fn normalize_code(tag: &str) -> String {
    let primary = tag
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_lowercase();
    if primary.is_empty() {
        UNKNOWN_LANGUAGE.to_string()
    } else {
        primary
    }
}

/// 取语言代码的英文显示名
///
/// 未知代码回退为代码本身的大写形式。
pub fn display_name(code: &str) -> String {
    let normalized = normalize_code(code);
    if normalized == UNKNOWN_LANGUAGE {
        return "Unknown language".to_string();
    }

    match Language::from_639_1(&normalized) {
        Some(language) => language.to_name().to_string(),
        None => code.trim().to_uppercase(),
    }
}
