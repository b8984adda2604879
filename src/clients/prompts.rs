//! 翻译提示词构造
//!
//! 提示词面向 OpenAI 兼容接口，要求模型原样保留文档的结构、
//! 步骤顺序和标题层级。

/// 系统提示词
pub const SYSTEM_PROMPT: &str = "You are a professional translator. \
Preserve the document's structure, step ordering, and headings exactly as they appear. \
Translate only the natural-language content and return nothing but the translated document.";

/// 构造用户消息
///
/// 拼接原标题、源语言、目标语言（名称 + 代码）和正文。
pub fn build_user_prompt(
    original_title: &str,
    source_language: &str,
    target_language_name: &str,
    target_language_code: &str,
    body: &str,
) -> String {
    format!(
        "Translate the following step-by-step guide into {} ({}).\n\
         The source language is {}.\n\n\
         Title: {}\n\n\
         {}",
        target_language_name, target_language_code, source_language, original_title, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_contains_all_fields() {
        let prompt = build_user_prompt("Install Docker", "en", "French", "fr", "Step 1: ...");
        assert!(prompt.contains("into French (fr)"));
        assert!(prompt.contains("source language is en"));
        assert!(prompt.contains("Title: Install Docker"));
        assert!(prompt.ends_with("Step 1: ..."));
    }
}
