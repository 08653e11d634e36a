//! Smart-contract request script: encodes `createRequestTo` and submits it.

pub mod abi;
pub mod config;
pub mod rpc;

pub use config::RequestDataConfig;
pub use rpc::{JsonRpcClient, TransactionRequest};

use crate::utils::error::{AdapterError, Result};
use abi::CreateRequestTo;

/// 編碼後的 calldata (0x 開頭)
pub fn encode_request(config: &RequestDataConfig) -> Result<String> {
    let call = CreateRequestTo {
        oracle: &config.oracle_address,
        job_id: &config.job_id,
        payment: &config.payment,
        url: &config.url,
        path: &config.path,
        times: &config.times,
    };
    Ok(format!("0x{}", hex::encode(call.encode()?)))
}

/// 送出 `createRequestTo` 交易，回傳交易 hash
pub async fn create_request(config: &RequestDataConfig, client: &JsonRpcClient) -> Result<String> {
    let contract = config.contract_address()?.to_string();
    let data = encode_request(config)?;

    let from = match &config.from {
        Some(from) => from.clone(),
        None => client
            .accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AdapterError::ConfigError {
                message: "node has no unlocked accounts; set ETH_FROM".to_string(),
            })?,
    };

    tracing::info!("Creating request on contract: {}", contract);
    let tx = TransactionRequest {
        from,
        to: contract,
        data,
    };
    let hash = client.send_transaction(&tx).await?;
    tracing::info!("✅ Request transaction sent: {}", hash);
    Ok(hash)
}
