//! Wire shapes of the prediction service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::UserIdentity;
use crate::models::{Details, Level, PredictionInput, PredictionOutcome, PredictionResult};

pub const STATUS_SUCCESS: &str = "success";

pub const PREDICT_PATH: &str = "api/predict";
pub const HISTORY_PATH: &str = "api/history";
pub const PREDICTIONS_PATH: &str = "api/predictions";
pub const HEALTH_PATH: &str = "api/test";

/// Envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    /// Only set by the predict endpoint.
    #[serde(default)]
    pub prediction_id: Option<Uuid>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(data),
            message: None,
            prediction_id: None,
        }
    }

    pub fn failure(message: Option<&str>) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            message: message.map(str::to_string),
            prediction_id: None,
        }
    }

    pub fn with_prediction_id(mut self, id: Uuid) -> Self {
        self.prediction_id = Some(id);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    #[serde(flatten)]
    pub input: PredictionInput,
    pub user_id: UserIdentity,
}

impl PredictionRequest {
    pub fn new(input: PredictionInput, user_id: UserIdentity) -> Self {
        Self { input, user_id }
    }
}

/// The `data` of a predict response. `inputs` is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionData {
    pub score: f64,
    pub level: Level,
    #[serde(default)]
    pub details: Option<Details>,
    #[serde(default)]
    pub inputs: Option<PredictionInput>,
}

impl PredictionData {
    /// Completes the result with the submitted input when the service did not echo it.
    pub fn into_outcome(
        self,
        submitted: PredictionInput,
        prediction_id: Option<Uuid>,
    ) -> PredictionOutcome {
        PredictionOutcome {
            prediction_id,
            result: PredictionResult {
                score: self.score,
                level: self.level,
                details: self.details,
                inputs: Some(self.inputs.unwrap_or(submitted)),
            },
        }
    }
}

/// A prediction stored by the service, looked up by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredPrediction {
    pub result: PredictionResult,
    #[serde(deserialize_with = "deserialize_stored_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub inputs: Option<PredictionInput>,
}

impl StoredPrediction {
    pub fn into_outcome(self, prediction_id: Uuid) -> PredictionOutcome {
        let mut result = self.result;
        if result.inputs.is_none() {
            result.inputs = self.inputs;
        }
        PredictionOutcome {
            prediction_id: Some(prediction_id),
            result,
        }
    }
}

fn deserialize_stored_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    crate::models::history::parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
