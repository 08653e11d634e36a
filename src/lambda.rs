#[cfg(feature = "lambda")]
use airvisual_adapter::handlers::lambda::handle_event;
#[cfg(feature = "lambda")]
use airvisual_adapter::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use airvisual_adapter::{build_adapter, Adapter, AdapterConfig, AdapterResponse};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde_json::Value;

/// 舊版 handler: 事件就是工作請求，結果直接回傳
#[cfg(feature = "lambda")]
async fn function_handler(
    adapter: &Adapter,
    event: LambdaEvent<Value>,
) -> Result<AdapterResponse, Error> {
    tracing::info!("Handling job request {}", event.context.request_id);
    Ok(handle_event(adapter, event.payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = AdapterConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let adapter = build_adapter(&config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    run(service_fn(|event| function_handler(&adapter, event))).await
}
