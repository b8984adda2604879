//! 页面 DOM 能力的 CDP 实现
//!
//! 所有读写都通过 `JsExecutor` 注入页面脚本完成。隐藏镜像
//! 容器与提示框的行为沿用原站内脚本的约定。

use async_trait::async_trait;
use chromiumoxide::Browser;
use std::sync::Arc;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::js_executor::{js_string, JsExecutor};
use crate::infrastructure::page_dom::{DomDocument, PageDom, TabLocator};

/// Scribe 卡片的标题节点选择器
const TITLE_SELECTOR: &str = r#"[data-testid="scribe-title"]"#;
/// 包裹单个 Scribe 的容器节点选择器
const CONTAINER_SELECTOR: &str = r#"[data-testid="scribe-card"]"#;
/// 容器内正文区域的选择器
const BODY_SELECTOR: &str = r#"[data-testid="scribe-body"]"#;
/// 页面内隐藏镜像容器的元素 id
const HIDDEN_CONTAINER_ID: &str = "scribe-auto-translator-hidden-data";

/// 确保隐藏镜像容器存在的公共脚本片段
///
/// 容器里放两个 select：Scribe 标题列表和检测到的语言。
const ENSURE_CONTAINER_JS: &str = r#"
function ensureContainer() {
  let container = document.getElementById('scribe-auto-translator-hidden-data');
  if (!container) {
    container = document.createElement('div');
    container.id = 'scribe-auto-translator-hidden-data';
    container.style.display = 'none';
    const scribeSelect = document.createElement('select');
    scribeSelect.id = 'scribeFinder';
    container.appendChild(scribeSelect);
    const detectedSelect = document.createElement('select');
    detectedSelect.id = 'detectedLanguage';
    container.appendChild(detectedSelect);
    document.body.appendChild(container);
  }
  return container;
}
"#;

/// 基于 CDP 的页面 DOM 能力实现
pub struct CdpPageDom {
    executor: JsExecutor,
}

impl CdpPageDom {
    /// 创建新的 CDP DOM 实现
    pub fn new(executor: JsExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl PageDom for CdpPageDom {
    async fn scan_documents(&self) -> AppResult<Vec<DomDocument>> {
        let script = format!(
            r#"(() => {{
  const docs = [];
  document.querySelectorAll({title}).forEach((el) => {{
    const container = el.closest({container});
    docs.push({{
      title: el.textContent || '',
      body: container ? container.innerText : null,
    }});
  }});
  return docs;
}})()"#,
            title = js_string(TITLE_SELECTOR),
            container = js_string(CONTAINER_SELECTOR),
        );
        self.executor.eval_as(script).await
    }

    async fn duplicate_document(
        &self,
        index: usize,
        original_title: &str,
        new_title: &str,
        translated_body: &str,
    ) -> AppResult<()> {
        let script = format!(
            r#"(() => {{
  const titles = document.querySelectorAll({title_sel});
  const titleEl = titles[{index}];
  if (!titleEl) return 'not-found';
  const container = titleEl.closest({container_sel});
  if (!container) return 'not-found';
  if (!container.parentNode) return 'no-parent';
  const copy = container.cloneNode(true);
  const copyTitle = copy.querySelector({title_sel});
  if (copyTitle) copyTitle.textContent = {new_title};
  const pre = document.createElement('pre');
  pre.style.whiteSpace = 'pre-wrap';
  pre.textContent = {body};
  const copyBody = copy.querySelector({body_sel});
  if (copyBody) {{
    copyBody.innerHTML = '';
    copyBody.appendChild(pre);
  }} else {{
    copy.appendChild(pre);
  }}
  container.parentNode.insertBefore(copy, container.nextSibling);
  return 'ok';
}})()"#,
            title_sel = js_string(TITLE_SELECTOR),
            container_sel = js_string(CONTAINER_SELECTOR),
            body_sel = js_string(BODY_SELECTOR),
            index = index,
            new_title = js_string(new_title),
            body = js_string(translated_body),
        );

        let status: String = self.executor.eval_as(script).await?;
        match status.as_str() {
            "ok" => Ok(()),
            "no-parent" => Err(AppError::insertion_failed(original_title)),
            _ => Err(AppError::not_found(original_title)),
        }
    }

    async fn detect_language(&self) -> AppResult<String> {
        let script =
            "(() => document.documentElement.lang || navigator.language || '')()".to_string();
        self.executor.eval_as(script).await
    }

    async fn publish_titles(&self, titles: &[String]) -> AppResult<()> {
        let titles_json =
            serde_json::to_string(titles).map_err(AppError::result_parse_failed)?;
        let script = format!(
            r#"(() => {{
{ensure}
  const container = ensureContainer();
  const select = container.querySelector('#scribeFinder');
  select.innerHTML = '';
  const defaultOption = document.createElement('option');
  defaultOption.value = 'default';
  defaultOption.textContent = '<Select a Scribe>';
  select.appendChild(defaultOption);
  for (const title of {titles}) {{
    const option = document.createElement('option');
    option.value = title;
    option.textContent = title;
    select.appendChild(option);
  }}
  return true;
}})()"#,
            ensure = ENSURE_CONTAINER_JS,
            titles = titles_json,
        );
        let _: bool = self.executor.eval_as(script).await?;
        Ok(())
    }

    async fn publish_language(&self, language: &str, display_name: &str) -> AppResult<()> {
        let script = format!(
            r#"(() => {{
{ensure}
  const container = ensureContainer();
  const select = container.querySelector('#detectedLanguage');
  select.innerHTML = '';
  const option = document.createElement('option');
  option.value = {code};
  option.textContent = {name};
  select.appendChild(option);
  return true;
}})()"#,
            ensure = ENSURE_CONTAINER_JS,
            code = js_string(language),
            name = js_string(display_name),
        );
        let _: bool = self.executor.eval_as(script).await?;
        Ok(())
    }

    async fn show_toast(&self, message: &str) -> AppResult<()> {
        let script = format!(
            r#"(() => {{
  const toast = document.createElement('div');
  toast.textContent = {message};
  toast.style.position = 'fixed';
  toast.style.bottom = '24px';
  toast.style.right = '24px';
  toast.style.padding = '12px 16px';
  toast.style.background = 'rgba(30, 64, 175, 0.92)';
  toast.style.color = '#fff';
  toast.style.borderRadius = '8px';
  toast.style.zIndex = '999999';
  toast.style.fontFamily = 'sans-serif';
  toast.style.fontSize = '14px';
  toast.style.maxWidth = '320px';
  document.body.appendChild(toast);
  setTimeout(() => {{
    toast.style.transition = 'opacity 300ms ease';
    toast.style.opacity = '0';
  }}, 2600);
  setTimeout(() => toast.remove(), 3100);
  return true;
}})()"#,
            message = js_string(message),
        );
        let _: bool = self.executor.eval_as(script).await?;
        Ok(())
    }
}

/// 基于 CDP 的标签页定位实现
///
/// 遍历浏览器已打开的页面，取第一个 URL 以 Scribe 站点
/// 前缀开头的标签页。
pub struct CdpTabLocator {
    browser: Browser,
    origin: String,
}

impl CdpTabLocator {
    /// 创建新的标签页定位器
    pub fn new(browser: Browser, origin: impl Into<String>) -> Self {
        Self {
            browser,
            origin: origin.into(),
        }
    }
}

#[async_trait]
impl TabLocator for CdpTabLocator {
    async fn locate(&self) -> AppResult<Arc<dyn PageDom>> {
        let pages = self.browser.pages().await?;
        debug!("当前浏览器共 {} 个页面", pages.len());

        for page in pages {
            if let Ok(Some(url)) = page.url().await {
                if url.starts_with(&self.origin) {
                    debug!("✓ 定位到 Scribe 标签页: {}", url);
                    return Ok(Arc::new(CdpPageDom::new(JsExecutor::new(page))));
                }
            }
        }

        Err(AppError::no_active_target(&self.origin))
    }
}
