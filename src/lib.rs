pub mod adapters;
pub mod config;
pub mod contract;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::AirVisualClient;
pub use config::AdapterConfig;
pub use core::adapter::{Adapter, QueryDefaults};
pub use core::{AdapterRequest, AdapterResponse, RequestData};
pub use utils::error::{AdapterError, Result};

use std::sync::Arc;

/// 依設定建立連到 AirVisual 的 adapter
pub fn build_adapter<C: core::ConfigProvider + ?Sized>(config: &C) -> Result<Adapter> {
    let client = AirVisualClient::new(config)?;
    tracing::debug!("Upstream endpoint: {}", client.url());
    Ok(Adapter::new(
        Arc::new(client),
        QueryDefaults::from_config(config),
    ))
}
