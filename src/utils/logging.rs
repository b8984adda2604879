/// 日志工具模块
///
/// 提供日志初始化和启动横幅
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 默认 info 级别，可通过 RUST_LOG 覆盖；VERBOSE_LOGGING 打开
/// 后默认 debug 级别。
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // 重复初始化时静默忽略，集成测试会多次调用
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 Scribe 自动翻译 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🎯 目标站点: {}", config.target_origin);
    info!("🧠 翻译模型: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}
