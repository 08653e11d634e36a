use crate::config::toml_config::TomlConfig;
use crate::config::AdapterConfig;
use crate::handlers::http::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "airvisual-adapter")]
#[command(about = "HTTP adapter for the AirVisual nearest_city API")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, env = "ADAPTER_HOST")]
    pub host: Option<String>,

    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, hide_env_values = true, env = "AIRVISUAL_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 優先順序: 命令列 > 設定檔 > 環境變數 > 預設值
    pub fn resolve(&self) -> Result<(AdapterConfig, ServerConfig)> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_with<F>(&self, lookup: F) -> Result<(AdapterConfig, ServerConfig)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut server = ServerConfig::default();
        let mut adapter = AdapterConfig::from_vars(lookup);

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.apply_to(&mut adapter);
            if let Some(host) = file.server_host() {
                server.host = host.to_string();
            }
            if let Some(port) = file.server_port() {
                server.port = port;
            }
        }

        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
        if let Some(base_url) = &self.base_url {
            adapter.base_url = base_url.clone();
        }
        if let Some(api_key) = &self.api_key {
            adapter.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            adapter.timeout_seconds = timeout;
        }

        Ok((adapter, server))
    }
}
