//! 页面 DOM 能力契约
//!
//! 活页面的 DOM 是 Scribe 的唯一事实来源。这里把"查询 DOM"
//! 抽成显式的能力接口，让上层的查找逻辑可以脱离真实浏览器
//! 进行测试；CDP 实现见 `cdp_dom`。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppResult;

/// 一次页面扫描得到的单个 Scribe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomDocument {
    /// 标题原文（未裁剪）
    pub title: String,
    /// 容器正文；容器节点无法定位时为 `None`
    pub body: Option<String>,
}

impl DomDocument {
    /// 构造带正文的文档（测试与扫描结果共用）
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Some(body.into()),
        }
    }
}

/// 页面 DOM 能力
///
/// 所有操作作用于当前定位到的标签页，都跨进程边界异步执行。
/// 变更操作会直接改动活页面，没有回滚。
#[async_trait]
pub trait PageDom: Send + Sync {
    /// 按 DOM 顺序扫描页面上的全部 Scribe
    async fn scan_documents(&self) -> AppResult<Vec<DomDocument>>;

    /// 在扫描序号 `index` 处的 Scribe 之后插入翻译副本
    ///
    /// 副本克隆原容器的展示结构，标题替换为 `new_title`，
    /// 正文以预格式化文本替换为 `translated_body`。
    async fn duplicate_document(
        &self,
        index: usize,
        original_title: &str,
        new_title: &str,
        translated_body: &str,
    ) -> AppResult<()>;

    /// 读取页面声明的语言标签（可能为空字符串）
    async fn detect_language(&self) -> AppResult<String>;

    /// 把标题列表镜像到页面的隐藏容器
    async fn publish_titles(&self, titles: &[String]) -> AppResult<()>;

    /// 把检测到的语言镜像到页面的隐藏容器
    async fn publish_language(&self, language: &str, display_name: &str) -> AppResult<()>;

    /// 在页面右下角显示一条短暂的提示
    async fn show_toast(&self, message: &str) -> AppResult<()>;
}

/// 目标标签页定位能力
///
/// 每次请求都重新定位一次标签页，页面的开关由用户随时掌控。
#[async_trait]
pub trait TabLocator: Send + Sync {
    /// 定位 URL 以 Scribe 站点前缀开头的标签页
    ///
    /// 找不到时返回 `NoActiveTarget`。
    async fn locate(&self) -> AppResult<Arc<dyn PageDom>>;
}
