use anyhow::Result;
use nutcracker_123::{logger, App, Config};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：优先使用 NUTCRACKER_CONFIG 指定的 TOML 文件
    let config = match std::env::var("NUTCRACKER_CONFIG") {
        Ok(path) => Config::load_toml(Path::new(&path)).await?,
        Err(_) => Config::from_env(),
    };

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行应用
    let _stats = App::initialize(config).run().await?;

    Ok(())
}
