//! 状态显示上下文
//!
//! 控制面的最新状态行。只显示，不恢复：错误文本原样呈现。
//! 即便直接响应通道已经断开，这里也能通过广播得知结局。

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::AppResult;
use crate::messages::router::MessageHandler;
use crate::messages::types::Message;

/// 状态显示上下文
pub struct StatusViewContext;

#[async_trait]
impl MessageHandler for StatusViewContext {
    async fn handle(&mut self, message: &Message) -> AppResult<Option<Message>> {
        if let Message::TranslationComplete {
            success,
            new_title,
            error,
            ..
        } = message
        {
            match (*success, new_title, error) {
                (true, Some(title), _) => info!("Created translation: {}", title),
                (false, _, Some(description)) => error!("{}", description),
                _ => {}
            }
        }
        Ok(None)
    }
}
