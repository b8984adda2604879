//! 监听上下文
//!
//! 订阅消息总线的两个上下文，各自持有自己的路由器：
//! - `PageMirrorContext` - 缓存落盘 + 页面隐藏容器镜像 + 成功提示
//! - `StatusViewContext` - 控制面状态行

pub mod page_mirror;
pub mod status_view;

pub use page_mirror::PageMirrorContext;
pub use status_view::StatusViewContext;
