//! Minimal Ethereum JSON-RPC client for sending the request transaction.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::utils::error::{AdapterError, Result};

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: T,
    pub id: u64,
}

impl<T> JsonRpcRequest<T> {
    pub fn new(method: impl Into<String>, params: T, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// `eth_sendTransaction` 的參數；gas 交給節點估算
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
}

pub struct JsonRpcClient {
    client: Client,
    url: String,
    request_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            request_id: AtomicU64::new(1),
        })
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R> {
        let request = JsonRpcRequest::new(method, params, self.next_id());
        tracing::debug!("JSON-RPC {} -> {}", method, self.url);

        let response: JsonRpcResponse<R> = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(AdapterError::RpcError {
                code: error.code,
                message: error.message,
            });
        }

        response.result.ok_or_else(|| AdapterError::RpcError {
            code: 0,
            message: format!("{} returned no result", method),
        })
    }

    pub async fn accounts(&self) -> Result<Vec<String>> {
        self.call("eth_accounts", Vec::<()>::new()).await
    }

    /// 回傳交易 hash
    pub async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String> {
        self.call("eth_sendTransaction", [tx]).await
    }
}
