//! 单次翻译请求的阶段机
//!
//! 每次调用创建一个实例，从不持久化：
//! Idle → LocatingTab → Extracting → Translating → Duplicating
//! → Notifying → (Done | Failed)

use std::fmt;

/// 翻译工作流阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    /// 尚未开始
    Idle,
    /// 定位目标标签页
    LocatingTab,
    /// 提取原文
    Extracting,
    /// 调用翻译接口
    Translating,
    /// 插入翻译副本
    Duplicating,
    /// 广播最终结果
    Notifying,
    /// 成功收尾
    Done,
    /// 失败收尾
    Failed,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowStage::Idle => "Idle",
            WorkflowStage::LocatingTab => "LocatingTab",
            WorkflowStage::Extracting => "Extracting",
            WorkflowStage::Translating => "Translating",
            WorkflowStage::Duplicating => "Duplicating",
            WorkflowStage::Notifying => "Notifying",
            WorkflowStage::Done => "Done",
            WorkflowStage::Failed => "Failed",
        };
        write!(f, "{}", name)
    }
}
