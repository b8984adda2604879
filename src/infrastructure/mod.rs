//! 基础设施层
//!
//! 持有稀缺资源（Page / Browser），只对上层暴露能力：
//! - `JsExecutor` - 唯一的 page owner，提供 eval() 能力
//! - `PageDom` / `TabLocator` - 可注入的 DOM 能力契约
//! - `CdpPageDom` / `CdpTabLocator` - 基于 CDP 的真实实现

pub mod cdp_dom;
pub mod js_executor;
pub mod page_dom;

pub use cdp_dom::{CdpPageDom, CdpTabLocator};
pub use js_executor::JsExecutor;
pub use page_dom::{DomDocument, PageDom, TabLocator};
