//! 消息总线
//!
//! 编排层对外广播通知的唯一通道。投递是次要的尽力而为：
//! 接收方全部退订（例如弹窗已关闭）时消息被静默吞掉，
//! 绝不作为请求失败向上传播。

use tokio::sync::broadcast;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::messages::types::Message;

/// 广播消息总线
#[derive(Clone)]
pub struct MessageBus {
    tx: broadcast::Sender<Message>,
}

impl MessageBus {
    /// 创建新的消息总线
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 订阅总线
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.tx.subscribe()
    }

    /// 尽力投递一条通知
    ///
    /// 没有任何接收者时投递失败被吞掉，只记 debug 日志。
    pub fn publish(&self, message: Message) {
        match self.try_publish(message) {
            Ok(receivers) => debug!("通知已投递给 {} 个接收者", receivers),
            Err(e) => debug!("通知无人接收，已忽略: {}", e),
        }
    }

    /// 投递一条通知，返回接收者数量
    pub fn try_publish(&self, message: Message) -> AppResult<usize> {
        self.tx
            .send(message)
            .map_err(|e| AppError::delivery(e.to_string()))
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new(16)
    }
}
