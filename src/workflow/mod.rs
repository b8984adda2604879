//! 流程层
//!
//! 定义"一次翻译请求"的完整处理流程：
//! - `WorkflowStage` - 请求内的阶段机
//! - `TranslateFlow` - 流程编排（凭证 → 定位 → 提取 → 翻译 → 副本 → 广播）

pub mod stage;
pub mod translate_flow;

pub use stage::WorkflowStage;
pub use translate_flow::TranslateFlow;
