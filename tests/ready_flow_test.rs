//! 就绪快照与消息路由测试

mod common;

use std::sync::Arc;

use scribe_auto_translate::contexts::PageMirrorContext;
use scribe_auto_translate::error::{AppError, BrowserError};
use scribe_auto_translate::infrastructure::page_dom::DomDocument;
use scribe_auto_translate::messages::types::{Message, RequestResponse};
use scribe_auto_translate::messages::{MessageBus, MessageRouter};
use scribe_auto_translate::orchestrator::Orchestrator;
use scribe_auto_translate::storage::LocalStore;

use common::{FakePageDom, FakeTabLocator, MockTranslator};

fn orchestrator_with(dom: Arc<FakePageDom>, bus: &MessageBus) -> Orchestrator {
    Orchestrator::new(
        Arc::new(FakeTabLocator::with(dom)),
        Arc::new(MockTranslator::succeeding("ok")),
        bus.clone(),
    )
}

#[tokio::test]
async fn test_ready_snapshot_and_cache_broadcast() {
    let dom = Arc::new(FakePageDom::with_documents(
        vec![
            DomDocument::new("  Install Docker  ", "body"),
            DomDocument::new("Setup CI", "body"),
        ],
        "fr-FR",
    ));
    let bus = MessageBus::default();
    let mut rx = bus.subscribe();

    let snapshot = orchestrator_with(dom, &bus).on_ready().await.unwrap();

    assert_eq!(snapshot.titles, vec!["Install Docker", "Setup CI"]);
    assert_eq!(snapshot.language, "fr");

    // 两条缓存更新通知都已广播
    assert_eq!(
        rx.try_recv().unwrap(),
        Message::ScribeTitles {
            titles: vec!["Install Docker".to_string(), "Setup CI".to_string()]
        }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        Message::LanguageDetected {
            language: "fr".to_string()
        }
    );
}

#[tokio::test]
async fn test_ready_degrades_when_title_listing_fails() {
    let mut page = FakePageDom::with_documents(vec![], "en");
    page.fail_scan = true;
    let bus = MessageBus::default();

    let snapshot = orchestrator_with(Arc::new(page), &bus)
        .on_ready()
        .await
        .unwrap();

    // 标题获取失败只降级这一半，语言检测照常
    assert!(snapshot.titles.is_empty());
    assert_eq!(snapshot.language, "en");
}

#[tokio::test]
async fn test_ready_degrades_when_language_detection_fails() {
    let mut page = FakePageDom::with_documents(
        vec![DomDocument::new("Install Docker", "body")],
        "en",
    );
    page.fail_language = true;
    let bus = MessageBus::default();

    let snapshot = orchestrator_with(Arc::new(page), &bus)
        .on_ready()
        .await
        .unwrap();

    assert_eq!(snapshot.titles, vec!["Install Docker"]);
    assert_eq!(snapshot.language, "und");
}

#[tokio::test]
async fn test_ready_requires_target_tab() {
    let bus = MessageBus::default();
    let orchestrator = Orchestrator::new(
        Arc::new(FakeTabLocator::empty()),
        Arc::new(MockTranslator::succeeding("ok")),
        bus.clone(),
    );

    let err = orchestrator.on_ready().await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Browser(BrowserError::NoActiveTarget { .. })
    ));

    // 消息入口把失败收敛成 ok=false 的响应对象
    match orchestrator.handle_request(&Message::PopupReady).await {
        Some(RequestResponse::Ready(ready)) => {
            assert!(!ready.ok);
            assert!(ready.error.unwrap().contains("标签页"));
        }
        other => panic!("意外的响应: {:?}", other),
    }
}

#[tokio::test]
async fn test_request_entry_ignores_notifications() {
    let dom = Arc::new(FakePageDom::with_documents(vec![], "en"));
    let bus = MessageBus::default();
    let orchestrator = orchestrator_with(dom, &bus);

    let response = orchestrator
        .handle_request(&Message::LanguageDetected {
            language: "en".to_string(),
        })
        .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_page_mirror_context_persists_and_mirrors() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path().join("state.toml"));
    let dom = Arc::new(FakePageDom::with_documents(vec![], "en"));

    let mut router = MessageRouter::new("page-mirror").with_handler(Box::new(
        PageMirrorContext::new(store.clone(), Arc::new(FakeTabLocator::with(dom.clone()))),
    ));

    router
        .dispatch(&Message::ScribeTitles {
            titles: vec!["Install Docker".to_string()],
        })
        .await;
    router
        .dispatch(&Message::LanguageDetected {
            language: "fr".to_string(),
        })
        .await;
    router
        .dispatch(&Message::translation_success(
            "[FR] Install Docker but in French",
            "fr",
            "French",
        ))
        .await;

    // 缓存已落盘
    assert_eq!(
        store.scribe_titles().await.unwrap(),
        vec!["Install Docker".to_string()]
    );
    assert_eq!(store.detected_language().await.unwrap(), "fr");

    // 页面镜像与成功提示都已发生
    assert_eq!(
        dom.published_titles.lock().unwrap().as_slice(),
        &[vec!["Install Docker".to_string()]]
    );
    assert_eq!(
        dom.published_languages.lock().unwrap().as_slice(),
        &[("fr".to_string(), "French".to_string())]
    );
    assert_eq!(
        dom.toasts.lock().unwrap().as_slice(),
        &["Created translated Scribe: [FR] Install Docker but in French".to_string()]
    );
}
