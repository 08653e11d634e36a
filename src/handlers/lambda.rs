//! Lambda 介面
//!
//! - `handle_event`: 舊版 handler，事件本身就是工作請求，直接回傳結果
//! - `handle_proxy_event`: proxy (v2) handler，`body` 是 JSON 字串，回傳
//!   `{statusCode, body, isBase64Encoded}`

use crate::core::adapter::{Adapter, BAD_REQUEST_STATUS};
use crate::core::AdapterResponse;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyRequest {
    pub fn with_json_body(body: &Value) -> Result<Self> {
        Ok(Self {
            body: Some(serde_json::to_string(body)?),
            is_base64_encoded: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    pub fn new(status_code: u16, payload: &AdapterResponse) -> Result<Self> {
        Ok(Self {
            status_code,
            body: serde_json::to_string(payload)?,
            is_base64_encoded: false,
        })
    }

    /// 解回 `body` 裡的結果
    pub fn payload(&self) -> Result<AdapterResponse> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub async fn handle_event(adapter: &Adapter, event: Value) -> AdapterResponse {
    let (_, response) = adapter.handle_value(event).await;
    response
}

pub async fn handle_proxy_event(adapter: &Adapter, event: ProxyRequest) -> Result<ProxyResponse> {
    if event.is_base64_encoded {
        tracing::warn!("❌ Rejecting base64-encoded proxy body");
        let payload = Adapter::bad_request(Value::Null, "base64-encoded bodies are not supported");
        return ProxyResponse::new(BAD_REQUEST_STATUS, &payload);
    }

    let parsed = match event.body.as_deref() {
        Some(body) => serde_json::from_str::<Value>(body).map_err(|e| e.to_string()),
        None => Err("request body is missing".to_string()),
    };

    let (status, payload) = match parsed {
        Ok(value) => adapter.handle_value(value).await,
        Err(message) => {
            tracing::warn!("❌ Rejecting proxy event: {}", message);
            (BAD_REQUEST_STATUS, Adapter::bad_request(Value::Null, message))
        }
    };

    ProxyResponse::new(status, &payload)
}
