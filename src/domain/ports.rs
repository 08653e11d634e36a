use crate::domain::model::{ApiReply, QueryParams};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 上游空氣品質 API
#[async_trait]
pub trait AirQualityApi: Send + Sync {
    /// 回傳任何 HTTP 狀態都算成功；只有傳輸失敗才是 `Err`
    async fn nearest_city(&self, query: &QueryParams) -> Result<ApiReply>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn default_lat(&self) -> &str;
    fn default_lon(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
