//! 真实浏览器集成测试
//!
//! 需要本机以调试端口启动浏览器并打开 Scribe 站点，
//! 默认忽略，手动运行：cargo test -- --ignored

use std::sync::Arc;

use scribe_auto_translate::browser::connect_to_browser;
use scribe_auto_translate::config::Config;
use scribe_auto_translate::infrastructure::page_dom::{PageDom, TabLocator};
use scribe_auto_translate::infrastructure::CdpTabLocator;
use scribe_auto_translate::services::ScribeService;
use scribe_auto_translate::utils::logging;

#[tokio::test]
#[ignore]
async fn test_browser_connection() {
    logging::init(true);
    let config = Config::from_env();

    let result = connect_to_browser(config.browser_debug_port).await;
    assert!(result.is_ok(), "应该能够成功连接浏览器");
}

#[tokio::test]
#[ignore]
async fn test_locate_tab_and_list_titles() {
    logging::init(true);
    let config = Config::from_env();

    let browser = connect_to_browser(config.browser_debug_port)
        .await
        .expect("连接浏览器失败");
    let locator = CdpTabLocator::new(browser, &config.target_origin);

    let dom = locator.locate().await.expect("定位 Scribe 标签页失败");
    let scribe = ScribeService::new(dom);

    let titles = scribe.list_document_titles().await.expect("扫描页面失败");
    println!("找到 {} 个 Scribe", titles.len());

    let language = scribe.detect_page_language().await.expect("语言检测失败");
    println!("检测语言: {}", language);
}

#[tokio::test]
#[ignore]
async fn test_mirror_round_trip() {
    logging::init(true);
    let config = Config::from_env();

    let browser = connect_to_browser(config.browser_debug_port)
        .await
        .expect("连接浏览器失败");
    let locator = CdpTabLocator::new(browser, &config.target_origin);
    let dom: Arc<_> = locator.locate().await.expect("定位 Scribe 标签页失败");

    dom.publish_titles(&["Smoke test".to_string()])
        .await
        .expect("标题镜像失败");
    dom.publish_language("en", "English")
        .await
        .expect("语言镜像失败");
    dom.show_toast("Scribe auto translate smoke test")
        .await
        .expect("提示框失败");
}
