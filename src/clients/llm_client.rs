/// LLM API 客户端
///
/// 封装所有与翻译接口相关的调用逻辑。接口形状固定：
/// POST /chat/completions，Bearer 凭证，固定模型与低温度。
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clients::prompts;
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// 一次翻译调用的输入
#[derive(Debug, Clone)]
pub struct TranslationJob {
    /// 原 Scribe 标题
    pub original_title: String,
    /// 源语言代码
    pub source_language: String,
    /// 目标语言代码
    pub target_language_code: String,
    /// 目标语言显示名
    pub target_language_name: String,
    /// 待翻译正文
    pub body: String,
    /// 用户提供的 Bearer 凭证
    pub api_key: String,
}

/// 翻译能力
///
/// 工作流只依赖这个接口；测试里用脚本化的 mock 替换真实客户端。
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, job: &TranslationJob) -> AppResult<String>;
}

/// OpenAI 兼容接口的翻译客户端
pub struct OpenAiTranslator {
    http: reqwest::Client,
    api_base_url: String,
    model_name: String,
    temperature: f32,
}

impl OpenAiTranslator {
    /// 创建新的翻译客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base_url: config.llm_api_base_url.clone(),
            model_name: config.llm_model_name.clone(),
            temperature: config.llm_temperature,
        }
    }
}

#[async_trait]
impl TranslationProvider for OpenAiTranslator {
    async fn translate(&self, job: &TranslationJob) -> AppResult<String> {
        let endpoint = format!(
            "{}/chat/completions",
            self.api_base_url.trim_end_matches('/')
        );
        debug!("正在调用翻译接口，模型: {}", self.model_name);

        let request = ChatRequest {
            model: &self.model_name,
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompts::build_user_prompt(
                        &job.original_title,
                        &job.source_language,
                        &job.target_language_name,
                        &job.target_language_code,
                        &job.body,
                    ),
                },
            ],
        };

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&job.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("翻译接口请求失败: {}", e);
                AppError::request_failed(&endpoint, e)
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        evaluate_response(&self.model_name, status, &body)
    }
}

/// 判定一次接口响应
///
/// 非 2xx 状态或无法解析的响应体按上游错误处理（携带原始
/// 响应文本）；2xx 但没有可用补全内容按空响应处理。
pub fn evaluate_response(model: &str, status: u16, body: &str) -> AppResult<String> {
    if !(200..300).contains(&status) {
        return Err(AppError::upstream(status, body));
    }

    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|_| AppError::upstream(status, body))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| AppError::empty_response(model))
}

// ========== 接口数据结构 ==========

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
