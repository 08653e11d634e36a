use airvisual_adapter::handlers::lambda::{handle_proxy_event, ProxyRequest, ProxyResponse};
use airvisual_adapter::utils::{logger, validation::Validate};
use airvisual_adapter::{build_adapter, Adapter, AdapterConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

/// Proxy handler: `body` 是 JSON 字串，回傳 `{statusCode, body, isBase64Encoded}`
async fn function_handler(
    adapter: &Adapter,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    tracing::info!("Handling proxy request {}", event.context.request_id);
    handle_proxy_event(adapter, event.payload)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
}

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
