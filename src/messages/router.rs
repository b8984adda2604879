//! 消息路由器
//!
//! 每个上下文（页面镜像、状态显示）在启动时构造一个属于
//! 自己的路由器，不存在进程级的全局监听注册表。处理器是
//! (消息, 上下文) → 可选响应 的纯映射，副作用只落在上下文内。

use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::messages::types::Message;

/// 消息处理器
///
/// 一个上下文对某类消息的处理逻辑。不关心的消息返回 `Ok(None)`。
#[async_trait]
pub trait MessageHandler: Send {
    async fn handle(&mut self, message: &Message) -> AppResult<Option<Message>>;
}

/// 单个上下文的消息路由器
pub struct MessageRouter {
    /// 上下文名称（仅用于日志）
    context: &'static str,
    handlers: Vec<Box<dyn MessageHandler>>,
}

impl MessageRouter {
    /// 创建新的路由器
    pub fn new(context: &'static str) -> Self {
        Self {
            context,
            handlers: Vec::new(),
        }
    }

    /// 注册一个处理器（构造时一次性完成）
    pub fn with_handler(mut self, handler: Box<dyn MessageHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// 分发一条消息给所有处理器，返回第一个非空响应
    ///
    /// 处理器内部的错误只记日志，不中断其余处理器。
    pub async fn dispatch(&mut self, message: &Message) -> Option<Message> {
        let mut response = None;
        for handler in &mut self.handlers {
            match handler.handle(message).await {
                Ok(Some(reply)) if response.is_none() => response = Some(reply),
                Ok(_) => {}
                Err(e) => warn!("[{}] 消息处理失败: {}", self.context, e),
            }
        }
        response
    }

    /// 把路由器挂到总线订阅上，作为后台监听任务运行
    pub fn spawn_listener(mut self, mut rx: broadcast::Receiver<Message>) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(message) => {
                        self.dispatch(&message).await;
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("[{}] 监听滞后，丢弃 {} 条消息", self.context, skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("[{}] 总线已关闭，监听任务退出", self.context);
                        break;
                    }
                }
            }
        })
    }
}
