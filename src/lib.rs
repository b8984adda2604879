//! # Scribe Auto Translate
//!
//! 一个给 Scribe 站点做站内翻译的 Rust 工具：通过调试端口
//! 附着到正在运行的浏览器，扫描页面上的 Scribe（分步指南），
//! 把选中的指南送往 OpenAI 兼容的补全接口翻译，再把翻译副本
//! 插回活页面。
//!
//! ## 架构设计
//!
//! 本系统沿用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page / Browser），只暴露能力
//! - `JsExecutor` - 唯一的 page owner，提供 eval() 能力
//! - `PageDom` / `TabLocator` - 可注入、可脱离浏览器测试的 DOM 能力契约
//!
//! ### ② 业务能力层（Services / Clients）
//! - `services/` - 描述"我能做什么"
//! - `ScribeService` - 按标题（裁剪后精确匹配）查找页面 Scribe
//! - `clients/` - 外部接口
//! - `OpenAiTranslator` - 固定形状的 chat-completions 翻译调用
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次翻译请求"的完整处理流程
//! - `TranslateFlow` - 阶段机编排（凭证 → 定位 → 提取 → 翻译 → 副本 → 广播）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 应答 popupReady / translateScribe，唯一的资源持有方
//!
//! ### 消息层
//! - `messages/` - 按 `type` 字段区分的线上消息、广播总线、
//!   每个上下文自有的路由器
//! - `contexts/` - 两个监听上下文（页面镜像、状态行）
//!
//! 页面 DOM 是 Scribe 的唯一事实来源；状态文件里的标题与
//! 语言只是缓存提示。

pub mod app;
pub mod browser;
pub mod clients;
pub mod config;
pub mod contexts;
pub mod error;
pub mod infrastructure;
pub mod messages;
pub mod orchestrator;
pub mod services;
pub mod storage;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, Command};
pub use browser::connect_to_browser;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{CdpPageDom, CdpTabLocator, DomDocument, JsExecutor, PageDom, TabLocator};
pub use messages::{Message, MessageBus, MessageRouter, TranslateRequest};
pub use orchestrator::Orchestrator;
pub use workflow::{TranslateFlow, WorkflowStage};
