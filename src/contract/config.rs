use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ORACLE_ADDRESS: &str = "0x14301ce4eb78b591a5437bf4d6e592ba3ab1d742";
pub const DEFAULT_JOB_ID: &str = "6a2662fb442142e997257e7fc7fa1fe9";
pub const DEFAULT_PAYMENT: &str = "1000000000000000000";
pub const DEFAULT_URL: &str = "http://api.airvisual.com/v2/";
pub const DEFAULT_JSON_PATH: &str = "data.current.pollution.aqius";
pub const DEFAULT_TIMES: &str = "2";
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// `createRequestTo` 呼叫參數與部署目標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDataConfig {
    pub oracle_address: String,
    pub job_id: String,
    pub payment: String,
    pub url: String,
    pub path: String,
    pub times: String,
    pub rpc_url: String,
    pub contract_address: Option<String>,
    pub from: Option<String>,
}

impl Default for RequestDataConfig {
    fn default() -> Self {
        Self {
            oracle_address: DEFAULT_ORACLE_ADDRESS.to_string(),
            job_id: DEFAULT_JOB_ID.to_string(),
            payment: DEFAULT_PAYMENT.to_string(),
            url: DEFAULT_URL.to_string(),
            path: DEFAULT_JSON_PATH.to_string(),
            times: DEFAULT_TIMES.to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_address: None,
            from: None,
        }
    }
}

impl RequestDataConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            oracle_address: lookup("TRUFFLE_CL_BOX_ORACLE_ADDRESS")
                .unwrap_or(defaults.oracle_address),
            job_id: lookup("TRUFFLE_CL_BOX_JOB_ID").unwrap_or(defaults.job_id),
            payment: lookup("TRUFFLE_CL_BOX_PAYMENT").unwrap_or(defaults.payment),
            url: lookup("TRUFFLE_CL_BOX_URL").unwrap_or(defaults.url),
            path: lookup("TRUFFLE_CL_BOX_JSON_PATH").unwrap_or(defaults.path),
            times: lookup("TRUFFLE_CL_BOX_TIMES").unwrap_or(defaults.times),
            rpc_url: lookup("ETH_RPC_URL").unwrap_or(defaults.rpc_url),
            contract_address: lookup("MY_CONTRACT_ADDRESS"),
            from: lookup("ETH_FROM"),
        }
    }

    pub fn contract_address(&self) -> Result<&str> {
        validation::validate_required_field("MY_CONTRACT_ADDRESS", &self.contract_address)
            .map(String::as_str)
    }
}

impl Validate for RequestDataConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_eth_address("TRUFFLE_CL_BOX_ORACLE_ADDRESS", &self.oracle_address)?;
        validation::validate_non_empty_string("TRUFFLE_CL_BOX_JOB_ID", &self.job_id)?;
        validation::validate_non_empty_string("TRUFFLE_CL_BOX_URL", &self.url)?;
        validation::validate_non_empty_string("TRUFFLE_CL_BOX_JSON_PATH", &self.path)?;
        validation::validate_url("ETH_RPC_URL", &self.rpc_url)?;
        validation::validate_eth_address("MY_CONTRACT_ADDRESS", self.contract_address()?)?;
        if let Some(from) = &self.from {
            validation::validate_eth_address("ETH_FROM", from)?;
        }
        Ok(())
    }
}
