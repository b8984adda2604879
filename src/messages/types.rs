//! 跨上下文消息类型
//!
//! 与原浏览器扩展的线上格式保持一致：按 `type` 字段区分的
//! 标签联合，字段名为 camelCase。

use serde::{Deserialize, Serialize};

/// 跨上下文消息（按 `type` 字段区分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// 页面上的 Scribe 标题列表（缓存更新通知）
    #[serde(rename = "scribeTitles")]
    ScribeTitles { titles: Vec<String> },
    /// 页面检测到的语言（缓存更新通知）
    #[serde(rename = "languageDetected")]
    LanguageDetected { language: String },
    /// 翻译工作流的最终结果（成功或失败，广播给所有监听方）
    #[serde(rename = "translationComplete")]
    TranslationComplete {
        success: bool,
        #[serde(rename = "newTitle", skip_serializing_if = "Option::is_none")]
        new_title: Option<String>,
        #[serde(rename = "targetLanguageCode")]
        target_language_code: String,
        #[serde(rename = "targetLanguageName")]
        target_language_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// 控制面就绪，请求标题列表与检测语言（请求/响应）
    #[serde(rename = "popupReady")]
    PopupReady,
    /// 发起翻译工作流（请求/响应）
    #[serde(rename = "translateScribe")]
    TranslateScribe { payload: TranslateRequest },
}

impl Message {
    /// 构造成功的翻译完成通知
    pub fn translation_success(
        new_title: impl Into<String>,
        target_code: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Self {
        Message::TranslationComplete {
            success: true,
            new_title: Some(new_title.into()),
            target_language_code: target_code.into(),
            target_language_name: target_name.into(),
            error: None,
        }
    }

    /// 构造失败的翻译完成通知
    pub fn translation_failure(
        error: impl Into<String>,
        target_code: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Self {
        Message::TranslationComplete {
            success: false,
            new_title: None,
            target_language_code: target_code.into(),
            target_language_name: target_name.into(),
            error: Some(error.into()),
        }
    }
}

/// 翻译请求（短暂值对象，由控制面构造，编排层消费一次）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// 被翻译的 Scribe 的可见标题
    pub original_title: String,
    /// 目标语言代码（如 `fr`）
    pub target_language_code: String,
    /// 目标语言显示名（如 `French`）
    pub target_language_name: String,
    /// 页面检测到的源语言代码（未知时为 `und`）
    pub source_language: String,
    /// OpenAI API Key
    pub api_key: String,
}

/// `popupReady` 的响应对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    pub ok: bool,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `translateScribe` 的响应对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 编排层对请求类消息的响应
#[derive(Debug, Clone, PartialEq)]
pub enum RequestResponse {
    Ready(ReadyResponse),
    Translate(TranslateResponse),
}
