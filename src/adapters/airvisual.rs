//! AirVisual HTTP client
//!
//! 實作 `AirQualityApi`，呼叫 `GET {base_url}{endpoint}?lat=..&lon=..&key=..`

use crate::core::{AirQualityApi, ApiReply, ConfigProvider, QueryParams};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.airvisual.com/v2/";
pub const DEFAULT_ENDPOINT: &str = "nearest_city";

pub struct AirVisualClient {
    client: Client,
    url: Url,
}

impl AirVisualClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        let url = endpoint_url(config.base_url(), config.endpoint())?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// base URL 缺少結尾斜線時補上，避免 join 時吃掉最後一段路徑
fn endpoint_url(base_url: &str, endpoint: &str) -> Result<Url> {
    let base = if base_url.ends_with('/') {
        Url::parse(base_url)?
    } else {
        Url::parse(&format!("{}/", base_url))?
    };
    Ok(base.join(endpoint)?)
}

/// JSON 解析失敗時保留原始文字
fn parse_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl AirQualityApi for AirVisualClient {
    async fn nearest_city(&self, query: &QueryParams) -> Result<ApiReply> {
        tracing::debug!("Making API request to: {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query.pairs())
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let text = response.text().await?;
        Ok(ApiReply {
            status,
            body: parse_body(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_url_joins_path() {
        let url = endpoint_url(DEFAULT_BASE_URL, DEFAULT_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), "https://api.airvisual.com/v2/nearest_city");

        let url = endpoint_url("http://localhost:9000/v2", "nearest_city").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/v2/nearest_city");
    }

    #[test]
    fn test_parse_body_falls_back_to_text() {
        assert_eq!(parse_body(r#"{"status":"ok"}"#.to_string()), json!({"status": "ok"}));
        assert_eq!(
            parse_body("Too Many Requests".to_string()),
            json!("Too Many Requests")
        );
    }
}
