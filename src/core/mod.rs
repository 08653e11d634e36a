pub mod adapter;

pub use crate::domain::model::{
    AdapterRequest, AdapterResponse, ApiReply, Coordinate, JobStatus, Outcome, QueryParams,
    RequestData,
};
pub use crate::domain::ports::{AirQualityApi, ConfigProvider};
pub use crate::utils::error::Result;
