use crate::config::{AdapterConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub upstream: UpstreamConfig,
    pub defaults: Option<DefaultsConfig>,
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AdapterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換 `${VAR}`；未設定的變數換成空字串，之後會從查詢參數中被移除
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                std::env::var(&caps[1]).unwrap_or_default()
            })
            .to_string()
    }

    pub fn to_adapter_config(&self) -> AdapterConfig {
        AdapterConfig {
            base_url: self.base_url().to_string(),
            endpoint: self.endpoint().to_string(),
            api_key: self.api_key().map(str::to_string),
            default_lat: self.default_lat().to_string(),
            default_lon: self.default_lon().to_string(),
            timeout_seconds: self.timeout_seconds(),
        }
    }

    /// 只覆寫檔案中有寫的欄位，其餘保留 `config` 原本的值
    pub fn apply_to(&self, config: &mut AdapterConfig) {
        let upstream = &self.upstream;
        if let Some(base_url) = &upstream.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(endpoint) = &upstream.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &upstream.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = upstream.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(defaults) = &self.defaults {
            if let Some(lat) = &defaults.lat {
                config.default_lat = lat.clone();
            }
            if let Some(lon) = &defaults.lon {
                config.default_lon = lon.clone();
            }
        }
    }

    pub fn server_host(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.host.as_deref())
    }

    pub fn server_port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.upstream
            .base_url
            .as_deref()
            .unwrap_or(crate::adapters::airvisual::DEFAULT_BASE_URL)
    }

    fn endpoint(&self) -> &str {
        self.upstream
            .endpoint
            .as_deref()
            .unwrap_or(crate::adapters::airvisual::DEFAULT_ENDPOINT)
    }

    fn api_key(&self) -> Option<&str> {
        self.upstream.api_key.as_deref()
    }

    fn default_lat(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.lat.as_deref())
            .unwrap_or(crate::core::adapter::DEFAULT_LAT)
    }

    fn default_lon(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.lon.as_deref())
            .unwrap_or(crate::core::adapter::DEFAULT_LON)
    }

    fn timeout_seconds(&self) -> u64 {
        self.upstream
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_adapter_config().validate()
    }
}
