//! 页面镜像上下文
//!
//! 对应原站内脚本的职责：收到缓存更新通知时写入状态文件，
//! 并把数据镜像进页面的隐藏容器；翻译成功时在页面上弹提示。
//! 页面随时可能关闭，定位失败只降级为"不镜像"，不算错误。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::page_dom::TabLocator;
use crate::messages::router::MessageHandler;
use crate::messages::types::Message;
use crate::services::language;
use crate::storage::LocalStore;

/// 页面镜像上下文
pub struct PageMirrorContext {
    store: LocalStore,
    locator: Arc<dyn TabLocator>,
}

impl PageMirrorContext {
    /// 创建新的页面镜像上下文
    pub fn new(store: LocalStore, locator: Arc<dyn TabLocator>) -> Self {
        Self { store, locator }
    }
}

#[async_trait]
impl MessageHandler for PageMirrorContext {
    async fn handle(&mut self, message: &Message) -> AppResult<Option<Message>> {
        match message {
            Message::ScribeTitles { titles } => {
                self.store.set_scribe_titles(titles).await?;
                if let Ok(dom) = self.locator.locate().await {
                    dom.publish_titles(titles).await?;
                } else {
                    debug!("页面不在，跳过标题镜像");
                }
            }
            Message::LanguageDetected { language } => {
                self.store.set_detected_language(language).await?;
                if let Ok(dom) = self.locator.locate().await {
                    dom.publish_language(language, &language::display_name(language))
                        .await?;
                } else {
                    debug!("页面不在，跳过语言镜像");
                }
            }
            Message::TranslationComplete {
                success: true,
                new_title: Some(new_title),
                ..
            } => {
                if let Ok(dom) = self.locator.locate().await {
                    dom.show_toast(&format!("Created translated Scribe: {}", new_title))
                        .await?;
                }
            }
            _ => {}
        }
        Ok(None)
    }
}
