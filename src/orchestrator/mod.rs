//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层是整个翻译工作流的"指挥中心"，也是唯一同时握有
//! 标签页定位、翻译客户端和消息总线的地方。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator (应答 popupReady / translateScribe)
//!     ↓
//! workflow::TranslateFlow (单次请求的阶段机)
//!     ↓
//! services (能力层：ScribeService / language)
//!     ↓
//! infrastructure (基础设施：JsExecutor / PageDom)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有本层持有 TabLocator 和 TranslationProvider
//! 2. **每请求独立**：每次调用新建一个 TranslateFlow，不保存状态
//! 3. **边界收敛**：所有工作流错误在这里转成结构化响应，不外泄
//!
//! 同一标签页上并发发起两次翻译时没有互斥保护，两次请求会
//! 各自执行（沿用源系统的行为，未引入排队或拒绝策略）。

use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::llm_client::TranslationProvider;
use crate::error::AppResult;
use crate::infrastructure::page_dom::TabLocator;
use crate::messages::bus::MessageBus;
use crate::messages::types::{
    Message, ReadyResponse, RequestResponse, TranslateRequest, TranslateResponse,
};
use crate::services::language::UNKNOWN_LANGUAGE;
use crate::services::ScribeService;
use crate::workflow::TranslateFlow;

/// 就绪快照：标题列表 + 检测到的语言
#[derive(Debug, Clone, PartialEq)]
pub struct ReadySnapshot {
    pub titles: Vec<String>,
    pub language: String,
}

/// 工作流编排器
pub struct Orchestrator {
    locator: Arc<dyn TabLocator>,
    translator: Arc<dyn TranslationProvider>,
    bus: MessageBus,
}

impl Orchestrator {
    /// 创建新的编排器
    pub fn new(
        locator: Arc<dyn TabLocator>,
        translator: Arc<dyn TranslationProvider>,
        bus: MessageBus,
    ) -> Self {
        Self {
            locator,
            translator,
            bus,
        }
    }

    /// 控制面就绪：采集页面快照并广播缓存更新
    ///
    /// 标题列表与语言检测是两个独立的尽力获取，并发执行且
    /// 互不影响：任何一个失败只把对应的那一半降级（空列表 /
    /// `und`）并记日志。只有定位不到标签页才算失败。
    pub async fn on_ready(&self) -> AppResult<ReadySnapshot> {
        let dom = self.locator.locate().await?;
        let scribe = ScribeService::new(dom);

        let (titles_result, language_result) = tokio::join!(
            scribe.list_document_titles(),
            scribe.detect_page_language()
        );

        let titles = match titles_result {
            Ok(titles) => titles,
            Err(e) => {
                warn!("读取标题列表失败，降级为空列表: {}", e);
                Vec::new()
            }
        };
        let language = match language_result {
            Ok(language) => language,
            Err(e) => {
                warn!("语言检测失败，降级为 und: {}", e);
                UNKNOWN_LANGUAGE.to_string()
            }
        };

        info!(
            "📋 页面快照: {} 个 Scribe，检测语言 {}",
            titles.len(),
            language
        );

        // 缓存更新通知：尽力投递，接收方不在时吞掉
        self.bus.publish(Message::ScribeTitles {
            titles: titles.clone(),
        });
        self.bus.publish(Message::LanguageDetected {
            language: language.clone(),
        });

        Ok(ReadySnapshot { titles, language })
    }

    /// 发起一次翻译工作流
    ///
    /// 每次调用一个新的 `TranslateFlow` 实例；结果先广播再返回。
    pub async fn on_translate(&self, request: &TranslateRequest) -> TranslateResponse {
        TranslateFlow::new(
            self.locator.clone(),
            self.translator.clone(),
            self.bus.clone(),
        )
        .run(request)
        .await
    }

    /// 请求类消息入口
    ///
    /// 只应答 `popupReady` 和 `translateScribe`，其余消息与
    /// 编排层无关，返回 `None`。
    pub async fn handle_request(&self, message: &Message) -> Option<RequestResponse> {
        match message {
            Message::PopupReady => {
                let response = match self.on_ready().await {
                    Ok(snapshot) => ReadyResponse {
                        ok: true,
                        titles: snapshot.titles,
                        language: snapshot.language,
                        error: None,
                    },
                    Err(e) => ReadyResponse {
                        ok: false,
                        titles: Vec::new(),
                        language: String::new(),
                        error: Some(e.to_string()),
                    },
                };
                Some(RequestResponse::Ready(response))
            }
            Message::TranslateScribe { payload } => {
                Some(RequestResponse::Translate(self.on_translate(payload).await))
            }
            _ => None,
        }
    }
}
