//! Scribe 查询服务
//!
//! 在 `PageDom` 能力之上实现按标题（裁剪后精确匹配）的显式
//! 查找契约。页面 DOM 是唯一事实来源，每次操作都重新扫描。

use std::sync::Arc;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::page_dom::{DomDocument, PageDom};
use crate::services::language;

/// Scribe 查询服务
pub struct ScribeService {
    dom: Arc<dyn PageDom>,
}

impl ScribeService {
    /// 创建新的查询服务
    pub fn new(dom: Arc<dyn PageDom>) -> Self {
        Self { dom }
    }

    /// 按 DOM 顺序列出页面上全部 Scribe 的标题
    ///
    /// 标题经过裁剪，空标题被丢弃。没有 Scribe 是合法的空结果，
    /// 不是错误。
    pub async fn list_document_titles(&self) -> AppResult<Vec<String>> {
        let documents = self.dom.scan_documents().await?;
        let titles: Vec<String> = documents
            .iter()
            .map(|doc| doc.title.trim().to_string())
            .filter(|title| !title.is_empty())
            .collect();
        debug!("页面扫描到 {} 个 Scribe", titles.len());
        Ok(titles)
    }

    /// 提取指定标题的 Scribe 正文（裁剪后返回）
    ///
    /// 标题不匹配或容器节点无法定位时返回 `NotFound`。
    pub async fn extract_document_body(&self, title: &str) -> AppResult<String> {
        let (_, document) = self.find_document(title).await?;
        let body = document.body.ok_or_else(|| AppError::not_found(title))?;
        Ok(body.trim().to_string())
    }

    /// 在原 Scribe 之后插入翻译副本
    ///
    /// 只追加不回滚；副本只能由用户手动删除。
    pub async fn duplicate_document(
        &self,
        title: &str,
        new_title: &str,
        translated_body: &str,
    ) -> AppResult<()> {
        let (index, _) = self.find_document(title).await?;
        self.dom
            .duplicate_document(index, title, new_title, translated_body)
            .await
    }

    /// 检测页面语言，返回规范化的主子标签（未知为 `und`）
    pub async fn detect_page_language(&self) -> AppResult<String> {
        let raw = self.dom.detect_language().await?;
        Ok(language::normalize_code(&raw))
    }

    /// 按裁剪后的标题精确查找 Scribe
    ///
    /// 页面上出现重复标题时只取第一个匹配（已知歧义，按源行为保留）。
    async fn find_document(&self, title: &str) -> AppResult<(usize, DomDocument)> {
        let wanted = title.trim();
        let documents = self.dom.scan_documents().await?;
        documents
            .into_iter()
            .enumerate()
            .find(|(_, doc)| doc.title.trim() == wanted)
            .ok_or_else(|| AppError::not_found(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// 只支持扫描和语言检测的内存 DOM
    struct StaticDom {
        documents: Vec<DomDocument>,
        language: String,
    }

    #[async_trait]
    impl PageDom for StaticDom {
        async fn scan_documents(&self) -> AppResult<Vec<DomDocument>> {
            Ok(self.documents.clone())
        }

        async fn duplicate_document(
            &self,
            _index: usize,
            _original_title: &str,
            _new_title: &str,
            _translated_body: &str,
        ) -> AppResult<()> {
            Ok(())
        }

        async fn detect_language(&self) -> AppResult<String> {
            Ok(self.language.clone())
        }

        async fn publish_titles(&self, _titles: &[String]) -> AppResult<()> {
            Ok(())
        }

        async fn publish_language(&self, _language: &str, _display_name: &str) -> AppResult<()> {
            Ok(())
        }

        async fn show_toast(&self, _message: &str) -> AppResult<()> {
            Ok(())
        }
    }

    fn service_with(documents: Vec<DomDocument>, lang: &str) -> ScribeService {
        ScribeService::new(Arc::new(StaticDom {
            documents,
            language: lang.to_string(),
        }))
    }

    #[test]
    fn test_list_titles_trims_and_drops_empty() {
        tokio_test::block_on(async {
            let service = service_with(
                vec![
                    DomDocument::new("  Install Docker  ", "step one"),
                    DomDocument::new("   ", "ignored"),
                    DomDocument::new("Setup CI", "step two"),
                ],
                "en",
            );
            let titles = service.list_document_titles().await.unwrap();
            assert_eq!(titles, vec!["Install Docker", "Setup CI"]);
        });
    }

    #[test]
    fn test_extract_missing_title_is_not_found() {
        tokio_test::block_on(async {
            let service = service_with(vec![DomDocument::new("Install Docker", "body")], "en");
            let err = service.extract_document_body("Missing").await.unwrap_err();
            assert!(matches!(
                err,
                AppError::Page(crate::error::PageError::NotFound { .. })
            ));
        });
    }

    #[test]
    fn test_extract_unresolvable_container_is_not_found() {
        tokio_test::block_on(async {
            let service = service_with(
                vec![DomDocument {
                    title: "Install Docker".to_string(),
                    body: None,
                }],
                "en",
            );
            let err = service
                .extract_document_body("Install Docker")
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                AppError::Page(crate::error::PageError::NotFound { .. })
            ));
        });
    }

    #[test]
    fn test_detect_language_normalizes() {
        tokio_test::block_on(async {
            let service = service_with(vec![], "fr-FR");
            assert_eq!(service.detect_page_language().await.unwrap(), "fr");

            let service = service_with(vec![], "");
            assert_eq!(service.detect_page_language().await.unwrap(), "und");
        });
    }
}
