//! 业务能力层
//!
//! - `ScribeService` - 按标题查找页面 Scribe 的显式契约
//! - `language` - 语言代码规范化与显示名

pub mod language;
pub mod scribe_service;

pub use scribe_service::ScribeService;
