use anyhow::Result;

use scribe_auto_translate::utils::logging;
use scribe_auto_translate::{App, Command, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 解析命令
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        Command::print_usage();
        return Ok(());
    };

    // 初始化并运行应用
    App::initialize(config).await?.run(command).await?;

    Ok(())
}
