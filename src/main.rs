use airvisual_adapter::handlers::http::HttpServer;
use airvisual_adapter::utils::error::ErrorSeverity;
use airvisual_adapter::utils::{logger, validation::Validate};
use airvisual_adapter::{build_adapter, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting airvisual-adapter");

    let (config, server_config) = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let adapter = match build_adapter(&config) {
        Ok(adapter) => adapter,
        Err(e) => {
            tracing::error!(
                "❌ Failed to create upstream client: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            let exit_code = if e.severity() == ErrorSeverity::Critical { 3 } else { 1 };
            std::process::exit(exit_code);
        }
    };

    let server = HttpServer::new(server_config, adapter);
    server
        .run_with_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
            }
        })
        .await?;

    Ok(())
}
