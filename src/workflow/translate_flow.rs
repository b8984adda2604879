//! 翻译工作流
//!
//! 一次 translateScribe 请求的完整流程：校验凭证 → 定位标签页
//! → 提取原文 → 调用翻译接口 → 计算副本标题 → 插入副本 →
//! 广播结果。无论成败，最终结果都先广播再返回给直接调用方，
//! 保证控制面在响应通道已断开（弹窗中途关闭）时仍能得知结局。
//!
//! 没有取消、没有超时、没有重试：任何一步失败对本次请求都是
//! 终局的。

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::clients::llm_client::{TranslationJob, TranslationProvider};
use crate::error::{AppError, AppResult};
use crate::infrastructure::page_dom::TabLocator;
use crate::messages::bus::MessageBus;
use crate::messages::types::{Message, TranslateRequest, TranslateResponse};
use crate::services::ScribeService;
use crate::workflow::stage::WorkflowStage;

/// 单次翻译请求的执行器
pub struct TranslateFlow {
    locator: Arc<dyn TabLocator>,
    translator: Arc<dyn TranslationProvider>,
    bus: MessageBus,
    stage: WorkflowStage,
}

impl TranslateFlow {
    /// 创建一次性的工作流实例
    pub fn new(
        locator: Arc<dyn TabLocator>,
        translator: Arc<dyn TranslationProvider>,
        bus: MessageBus,
    ) -> Self {
        Self {
            locator,
            translator,
            bus,
            stage: WorkflowStage::Idle,
        }
    }

    /// 计算翻译副本的标题
    ///
    /// 固定格式：`[<目标代码大写>] <原标题> but in <目标语言名>`。
    pub fn compose_new_title(original_title: &str, target_code: &str, target_name: &str) -> String {
        format!(
            "[{}] {} but in {}",
            target_code.to_uppercase(),
            original_title,
            target_name
        )
    }

    /// 执行工作流并返回响应对象
    ///
    /// 广播是次要的尽力投递，它自身的失败不改变请求结果。
    pub async fn run(mut self, request: &TranslateRequest) -> TranslateResponse {
        let result = self.execute(request).await;
        self.enter(WorkflowStage::Notifying);

        match result {
            Ok(new_title) => {
                self.bus.publish(Message::translation_success(
                    &new_title,
                    &request.target_language_code,
                    &request.target_language_name,
                ));
                self.enter(WorkflowStage::Done);
                info!("✅ 翻译完成: {}", new_title);
                TranslateResponse {
                    ok: true,
                    new_title: Some(new_title),
                    error: None,
                }
            }
            Err(e) => {
                let description = e.to_string();
                self.bus.publish(Message::translation_failure(
                    &description,
                    &request.target_language_code,
                    &request.target_language_name,
                ));
                self.enter(WorkflowStage::Failed);
                warn!("❌ 翻译失败: {}", description);
                TranslateResponse {
                    ok: false,
                    new_title: None,
                    error: Some(description),
                }
            }
        }
    }

    /// 主流程；任何一步出错立即向上返回
    async fn execute(&mut self, request: &TranslateRequest) -> AppResult<String> {
        // 凭证校验先于一切标签页与网络副作用
        if request.api_key.trim().is_empty() {
            return Err(AppError::MissingCredential);
        }

        self.enter(WorkflowStage::LocatingTab);
        let dom = self.locator.locate().await?;
        let scribe = ScribeService::new(dom);

        self.enter(WorkflowStage::Extracting);
        let body = scribe
            .extract_document_body(&request.original_title)
            .await?;
        debug!("提取正文 {} 字符", body.chars().count());

        self.enter(WorkflowStage::Translating);
        let job = TranslationJob {
            original_title: request.original_title.clone(),
            source_language: request.source_language.clone(),
            target_language_code: request.target_language_code.clone(),
            target_language_name: request.target_language_name.clone(),
            body,
            api_key: request.api_key.clone(),
        };
        let translated = self.translator.translate(&job).await?;

        let new_title = Self::compose_new_title(
            &request.original_title,
            &request.target_language_code,
            &request.target_language_name,
        );

        self.enter(WorkflowStage::Duplicating);
        scribe
            .duplicate_document(&request.original_title, &new_title, &translated)
            .await?;

        Ok(new_title)
    }

    /// 记录阶段流转
    fn enter(&mut self, next: WorkflowStage) {
        debug!("阶段流转: {} → {}", self.stage, next);
        self.stage = next;
    }
}
