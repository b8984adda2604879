//! 跨上下文消息传递
//!
//! 三个上下文（页面、编排层、控制面）之间的通信层：
//! - `types` - 线上消息格式（`type` 标签联合）
//! - `bus` - 广播总线（通知的尽力投递）
//! - `router` - 每个上下文自有的消息路由器

pub mod bus;
pub mod router;
pub mod types;

pub use bus::MessageBus;
pub use router::{MessageHandler, MessageRouter};
pub use types::{Message, ReadyResponse, RequestResponse, TranslateRequest, TranslateResponse};
