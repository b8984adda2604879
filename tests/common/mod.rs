//! 测试用的内存实现
//!
//! 用可编程的假页面和脚本化的假翻译客户端替换浏览器与网络。

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use scribe_auto_translate::clients::llm_client::{TranslationJob, TranslationProvider};
use scribe_auto_translate::error::{AppError, AppResult};
use scribe_auto_translate::infrastructure::page_dom::{DomDocument, PageDom, TabLocator};

fn sim_error(message: &str) -> AppError {
    AppError::result_parse_failed(std::io::Error::new(std::io::ErrorKind::Other, message.to_string()))
}

/// 可编程的内存页面
///
/// 记录全部变更调用；复制语义与真实页面一致：副本紧跟在
/// 原文档之后插入，原文档不动。
#[derive(Default)]
pub struct FakePageDom {
    pub documents: Mutex<Vec<DomDocument>>,
    pub language: Mutex<String>,
    pub fail_scan: bool,
    pub fail_language: bool,
    pub fail_duplicate_no_parent: bool,
    pub duplications: Mutex<Vec<(usize, String, String)>>,
    pub published_titles: Mutex<Vec<Vec<String>>>,
    pub published_languages: Mutex<Vec<(String, String)>>,
    pub toasts: Mutex<Vec<String>>,
}

impl FakePageDom {
    pub fn with_documents(documents: Vec<DomDocument>, language: &str) -> Self {
        Self {
            documents: Mutex::new(documents),
            language: Mutex::new(language.to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PageDom for FakePageDom {
    async fn scan_documents(&self) -> AppResult<Vec<DomDocument>> {
        if self.fail_scan {
            return Err(sim_error("scan blew up"));
        }
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn duplicate_document(
        &self,
        index: usize,
        original_title: &str,
        new_title: &str,
        translated_body: &str,
    ) -> AppResult<()> {
        let mut documents = self.documents.lock().unwrap();
        if index >= documents.len() {
            return Err(AppError::not_found(original_title));
        }
        if self.fail_duplicate_no_parent {
            return Err(AppError::insertion_failed(original_title));
        }
        documents.insert(index + 1, DomDocument::new(new_title, translated_body));
        self.duplications
            .lock()
            .unwrap()
            .push((index, new_title.to_string(), translated_body.to_string()));
        Ok(())
    }

    async fn detect_language(&self) -> AppResult<String> {
        if self.fail_language {
            return Err(sim_error("detection unavailable"));
        }
        Ok(self.language.lock().unwrap().clone())
    }

    async fn publish_titles(&self, titles: &[String]) -> AppResult<()> {
        self.published_titles.lock().unwrap().push(titles.to_vec());
        Ok(())
    }

    async fn publish_language(&self, language: &str, display_name: &str) -> AppResult<()> {
        self.published_languages
            .lock()
            .unwrap()
            .push((language.to_string(), display_name.to_string()));
        Ok(())
    }

    async fn show_toast(&self, message: &str) -> AppResult<()> {
        self.toasts.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// 假标签页定位器：有页面就返回它，没有就是 NoActiveTarget
pub struct FakeTabLocator {
    dom: Option<Arc<FakePageDom>>,
}

impl FakeTabLocator {
    pub fn with(dom: Arc<FakePageDom>) -> Self {
        Self { dom: Some(dom) }
    }

    pub fn empty() -> Self {
        Self { dom: None }
    }
}

#[async_trait]
impl TabLocator for FakeTabLocator {
    async fn locate(&self) -> AppResult<Arc<dyn PageDom>> {
        match &self.dom {
            Some(dom) => Ok(dom.clone() as Arc<dyn PageDom>),
            None => Err(AppError::no_active_target("https://scribehow.com")),
        }
    }
}

/// 假翻译客户端的脚本化行为
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// 永远成功，返回固定译文
    Success(String),
    /// 模拟上游错误响应
    Upstream(u16, String),
    /// 模拟空补全
    Empty,
}

/// 脚本化的假翻译客户端，统计调用次数
pub struct MockTranslator {
    outcome: MockOutcome,
    calls: AtomicUsize,
    pub jobs: Mutex<Vec<TranslationJob>>,
}

impl MockTranslator {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            jobs: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(text: &str) -> Self {
        Self::new(MockOutcome::Success(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(&self, job: &TranslationJob) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.jobs.lock().unwrap().push(job.clone());
        match &self.outcome {
            MockOutcome::Success(text) => Ok(text.clone()),
            MockOutcome::Upstream(status, body) => Err(AppError::upstream(*status, body.clone())),
            MockOutcome::Empty => Err(AppError::empty_response("gpt-4o-mini")),
        }
    }
}
