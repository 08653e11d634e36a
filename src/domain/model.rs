use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 外部節點送進來的工作請求
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdapterRequest {
    /// Job run id，原樣回傳，不檢查型別
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub data: Option<RequestData>,
}

impl AdapterRequest {
    pub fn new(id: impl Into<Value>, data: RequestData) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    #[serde(default)]
    pub lat: Option<Coordinate>,
    #[serde(default)]
    pub lon: Option<Coordinate>,
}

/// 座標可以是 JSON 數字或字串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(serde_json::Number),
    Text(String),
}

impl Coordinate {
    /// 查詢字串用的值；空字串視為未提供
    pub fn as_query_value(&self) -> Option<String> {
        match self {
            Coordinate::Number(n) => Some(n.to_string()),
            Coordinate::Text(s) if s.is_empty() => None,
            Coordinate::Text(s) => Some(s.clone()),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Coordinate::Number)
            .unwrap_or_else(|| Coordinate::Text(value.to_string()))
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Coordinate::Text(value.to_string())
    }
}

/// 上游 API 的原始回應
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn is_failure(&self) -> bool {
        self.status >= 400
    }
}

/// 依序保存的查詢參數
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 值為空字串或未提供時不加入
    pub fn push(&mut self, name: &str, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Errored,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Errored { status: JobStatus, error: Value },
    Data { data: Value },
}

/// 回給呼叫端的結果: `{jobRunID, data | status+error, statusCode}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterResponse {
    #[serde(rename = "jobRunID")]
    pub job_run_id: Value,
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl AdapterResponse {
    pub fn success(job_run_id: Value, data: Value, status_code: u16) -> Self {
        Self {
            job_run_id,
            outcome: Outcome::Data { data },
            status_code,
        }
    }

    pub fn errored(job_run_id: Value, error: Value, status_code: u16) -> Self {
        Self {
            job_run_id,
            outcome: Outcome::Errored {
                status: JobStatus::Errored,
                error,
            },
            status_code,
        }
    }

    pub fn is_errored(&self) -> bool {
        matches!(self.outcome, Outcome::Errored { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Data { data } => Some(data),
            Outcome::Errored { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Errored { error, .. } => Some(error),
            Outcome::Data { .. } => None,
        }
    }
}
