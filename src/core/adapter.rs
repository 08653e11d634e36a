use crate::core::{
    AdapterRequest, AdapterResponse, AirQualityApi, ConfigProvider, QueryParams, RequestData,
};
use serde_json::Value;
use std::sync::Arc;

/// 預設座標: 洛杉磯
pub const DEFAULT_LAT: &str = "34.0669";
pub const DEFAULT_LON: &str = "-118.2417";

/// 傳輸失敗時回報的狀態碼
pub const TRANSPORT_FAILURE_STATUS: u16 = 500;

/// 請求內容無法解析時回報的狀態碼
pub const BAD_REQUEST_STATUS: u16 = 400;

/// 組查詢字串用的預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub lat: String,
    pub lon: String,
    pub api_key: Option<String>,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            lat: DEFAULT_LAT.to_string(),
            lon: DEFAULT_LON.to_string(),
            api_key: None,
        }
    }
}

impl QueryDefaults {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            lat: config.default_lat().to_string(),
            lon: config.default_lon().to_string(),
            api_key: config.api_key().map(str::to_string),
        }
    }
}

/// 把工作請求轉成上游 API 呼叫，再把結果整理成回應
#[derive(Clone)]
pub struct Adapter {
    api: Arc<dyn AirQualityApi>,
    defaults: QueryDefaults,
}

impl Adapter {
    pub fn new(api: Arc<dyn AirQualityApi>, defaults: QueryDefaults) -> Self {
        Self { api, defaults }
    }

    pub fn defaults(&self) -> &QueryDefaults {
        &self.defaults
    }

    /// 組出 `lat`, `lon`, `key`；空字串的參數會被移除
    pub fn build_query(&self, data: Option<&RequestData>) -> QueryParams {
        let lat = data
            .and_then(|d| d.lat.as_ref())
            .and_then(|c| c.as_query_value())
            .unwrap_or_else(|| self.defaults.lat.clone());
        let lon = data
            .and_then(|d| d.lon.as_ref())
            .and_then(|c| c.as_query_value())
            .unwrap_or_else(|| self.defaults.lon.clone());

        let mut query = QueryParams::new();
        query.push("lat", Some(lat));
        query.push("lon", Some(lon));
        query.push("key", self.defaults.api_key.clone());
        query
    }

    /// 從未經檢查的 JSON 開始處理；格式錯誤時回 400，不呼叫上游
    pub async fn handle_value(&self, event: Value) -> (u16, AdapterResponse) {
        let job_run_id = event.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<AdapterRequest>(event) {
            Ok(input) => self.create_request(input).await,
            Err(e) => {
                tracing::warn!("❌ Rejecting malformed request for job {}: {}", job_run_id, e);
                (BAD_REQUEST_STATUS, Self::bad_request(job_run_id, e.to_string()))
            }
        }
    }

    pub fn bad_request(job_run_id: Value, message: impl Into<String>) -> AdapterResponse {
        AdapterResponse::errored(
            job_run_id,
            Value::String(message.into()),
            BAD_REQUEST_STATUS,
        )
    }

    /// 回傳 (HTTP 狀態碼, 回應內容)
    pub async fn create_request(&self, input: AdapterRequest) -> (u16, AdapterResponse) {
        let query = self.build_query(input.data.as_ref());
        tracing::debug!(
            "Requesting nearest city for lat={:?} lon={:?} (job {})",
            query.get("lat"),
            query.get("lon"),
            input.id
        );

        match self.api.nearest_city(&query).await {
            Ok(reply) if reply.is_failure() => {
                tracing::warn!(
                    "❌ Upstream API returned {} for job {}",
                    reply.status,
                    input.id
                );
                (
                    reply.status,
                    AdapterResponse::errored(input.id, reply.body, reply.status),
                )
            }
            Ok(reply) => {
                tracing::info!("✅ Job {} completed with status {}", input.id, reply.status);
                (
                    reply.status,
                    AdapterResponse::success(input.id, reply.body, reply.status),
                )
            }
            Err(e) => {
                tracing::error!("❌ Upstream request failed for job {}: {}", input.id, e);
                (
                    TRANSPORT_FAILURE_STATUS,
                    AdapterResponse::errored(
                        input.id,
                        Value::String(e.to_string()),
                        TRANSPORT_FAILURE_STATUS,
                    ),
                )
            }
        }
    }
}
