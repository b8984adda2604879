//! 控制面（CLI）
//!
//! 纯粘合层：把用户输入（Scribe 标题、目标语言、API Key）
//! 绑定到一次 translateScribe 请求，渲染缓存的标题列表与
//! 检测语言，并显示最新状态行。不含业务逻辑。

use anyhow::Result;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use crate::browser::connect_to_browser;
use crate::clients::llm_client::TranslationProvider;
use crate::clients::OpenAiTranslator;
use crate::config::Config;
use crate::contexts::{PageMirrorContext, StatusViewContext};
use crate::infrastructure::page_dom::TabLocator;
use crate::infrastructure::CdpTabLocator;
use crate::messages::types::{Message, RequestResponse, TranslateRequest};
use crate::messages::{MessageBus, MessageRouter};
use crate::orchestrator::Orchestrator;
use crate::services::language;
use crate::storage::LocalStore;
use crate::utils::logging;

/// 控制面命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 列出页面上的 Scribe 和检测到的语言
    List,
    /// 保存 API Key
    SetKey { api_key: String },
    /// 翻译指定标题的 Scribe
    Translate {
        title: String,
        target_code: String,
    },
}

impl Command {
    /// 解析命令行参数（不含程序名）
    pub fn parse(args: &[String]) -> Option<Command> {
        match args {
            [cmd] if cmd == "list" => Some(Command::List),
            [cmd, api_key] if cmd == "set-key" => Some(Command::SetKey {
                api_key: api_key.clone(),
            }),
            [cmd, title, code] if cmd == "translate" => Some(Command::Translate {
                title: title.clone(),
                target_code: code.clone(),
            }),
            _ => None,
        }
    }

    /// 打印用法说明
    pub fn print_usage() {
        eprintln!("用法:");
        eprintln!("  scribe_auto_translate list                          列出页面上的 Scribe");
        eprintln!("  scribe_auto_translate set-key <API_KEY>             保存 OpenAI API Key");
        eprintln!("  scribe_auto_translate translate <标题> <语言代码>   翻译指定 Scribe");
    }
}

/// 应用主结构
pub struct App {
    store: LocalStore,
    orchestrator: Orchestrator,
}

impl App {
    /// 初始化应用
    ///
    /// 连接浏览器、装配编排器，并启动两个监听上下文
    /// （页面镜像、状态行），各自持有自己的路由器。
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let browser = connect_to_browser(config.browser_debug_port).await?;
        let locator: Arc<dyn TabLocator> =
            Arc::new(CdpTabLocator::new(browser, &config.target_origin));
        let translator: Arc<dyn TranslationProvider> = Arc::new(OpenAiTranslator::new(&config));
        let store = LocalStore::new(&config.state_file);
        let bus = MessageBus::default();

        MessageRouter::new("page-mirror")
            .with_handler(Box::new(PageMirrorContext::new(
                store.clone(),
                locator.clone(),
            )))
            .spawn_listener(bus.subscribe());
        MessageRouter::new("status-view")
            .with_handler(Box::new(StatusViewContext))
            .spawn_listener(bus.subscribe());

        let orchestrator = Orchestrator::new(locator, translator, bus);

        Ok(Self {
            store,
            orchestrator,
        })
    }

    /// 执行一条控制面命令
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::List => self.show_snapshot().await,
            Command::SetKey { api_key } => {
                self.store.set_api_key(&api_key).await?;
                info!("✓ API Key 已保存");
                Ok(())
            }
            Command::Translate { title, target_code } => {
                self.translate(title, target_code).await
            }
        }
    }

    /// 就绪快照：标题列表 + 检测语言
    async fn show_snapshot(&self) -> Result<()> {
        let response = self
            .orchestrator
            .handle_request(&Message::PopupReady)
            .await;

        if let Some(RequestResponse::Ready(ready)) = response {
            if ready.ok {
                info!(
                    "检测语言: {} ({})",
                    language::display_name(&ready.language),
                    ready.language
                );
                if ready.titles.is_empty() {
                    info!("页面上没有找到 Scribe");
                }
                for (index, title) in ready.titles.iter().enumerate() {
                    info!("  {}. {}", index + 1, title);
                }
            } else {
                error!(
                    "{}",
                    ready.error.unwrap_or_else(|| "无法读取页面快照".to_string())
                );
            }
        }

        // 等监听上下文把缓存落盘
        sleep(Duration::from_millis(200)).await;
        Ok(())
    }

    /// 发起翻译并渲染直接响应
    async fn translate(&self, title: String, target_code: String) -> Result<()> {
        let source_language = self.store.detected_language().await?;
        let request = TranslateRequest {
            original_title: title,
            target_language_name: language::display_name(&target_code),
            target_language_code: target_code,
            source_language,
            api_key: self.store.api_key().await?,
        };

        info!("🌐 正在翻译: {}", request.original_title);
        let response = self
            .orchestrator
            .handle_request(&Message::TranslateScribe { payload: request })
            .await;

        if let Some(RequestResponse::Translate(result)) = response {
            match (result.ok, result.new_title, result.error) {
                (true, Some(new_title), _) => info!("✅ Created translation: {}", new_title),
                (_, _, Some(description)) => error!("{}", description),
                _ => error!("翻译请求没有返回结果"),
            }
        }

        // 等广播监听方（提示框 / 状态行）处理完
        sleep(Duration::from_millis(300)).await;
        Ok(())
    }
}
