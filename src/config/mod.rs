#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::airvisual::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT};
use crate::core::adapter::{DEFAULT_LAT, DEFAULT_LON};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Adapter 的執行期設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub base_url: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub default_lat: String,
    pub default_lon: String,
    pub timeout_seconds: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            default_lat: DEFAULT_LAT.to_string(),
            default_lon: DEFAULT_LON.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl AdapterConfig {
    /// 從環境變數載入；未設定的欄位使用預設值
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            base_url: lookup("AIRVISUAL_BASE_URL").unwrap_or(defaults.base_url),
            endpoint: lookup("AIRVISUAL_ENDPOINT").unwrap_or(defaults.endpoint),
            api_key: lookup("AIRVISUAL_API_KEY"),
            default_lat: lookup("ADAPTER_DEFAULT_LAT").unwrap_or(defaults.default_lat),
            default_lon: lookup("ADAPTER_DEFAULT_LON").unwrap_or(defaults.default_lon),
            timeout_seconds: lookup("ADAPTER_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }
}

impl ConfigProvider for AdapterConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn default_lat(&self) -> &str {
        &self.default_lat
    }

    fn default_lon(&self) -> &str {
        &self.default_lon
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for AdapterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("endpoint", &self.endpoint)?;
        validation::validate_coordinate("default_lat", &self.default_lat, 90.0)?;
        validation::validate_coordinate("default_lon", &self.default_lon, 180.0)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;

        if self.api_key.as_deref().map_or(true, str::is_empty) {
            tracing::warn!("⚠️ AIRVISUAL_API_KEY is not set, requests will be sent without a key");
        }

        tracing::debug!("✅ Adapter configuration validation passed");
        Ok(())
    }
}
