use airvisual_adapter::contract::{self, JsonRpcClient, RequestDataConfig};
use airvisual_adapter::utils::error::ErrorSeverity;
use airvisual_adapter::utils::{logger, validation::Validate};
use clap::Parser;

#[derive(Parser)]
#[command(name = "request-data")]
#[command(about = "Create a data request on the deployed requesting contract")]
struct Args {
    /// Print the encoded calldata without sending a transaction
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let config = RequestDataConfig::from_env();
    tracing::debug!("Request config: {:?}", config);

    if args.dry_run {
        let calldata = contract::encode_request(&config)?;
        tracing::info!("🔍 DRY RUN MODE - transaction will not be sent");
        println!("{}", calldata);
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = JsonRpcClient::new(&config.rpc_url)?;

    match contract::create_request(&config, &client).await {
        Ok(tx_hash) => {
            println!("{}", tx_hash);
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
