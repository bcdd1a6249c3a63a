use clap::Parser;
use trivia_api::core::ConfigProvider;
use trivia_api::utils::logger;
use trivia_api::{build_store, CliConfig, TriviaServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting trivia-api");
    tracing::debug!("Resolved config: {:?}", config);

    let store = match build_store(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Failed to load question store: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    TriviaServer::new(store).bind_and_run(&config).await?;

    Ok(())
}
