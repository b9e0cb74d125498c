pub mod client;
pub mod protocol;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::identity::UserIdentity;
use crate::models::HistoryEntry;

pub use client::HttpPredictionService;
pub use protocol::{ApiResponse, PredictionData, PredictionRequest, StoredPrediction};

/// Failures below the service's own status field.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("invalid service URL '{0}'")]
    Url(String),
}

/// Remote scoring service. Each call is one request; no retries.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<ApiResponse<PredictionData>, ApiError>;

    async fn fetch_history(
        &self,
        user_id: &UserIdentity,
    ) -> Result<ApiResponse<Vec<HistoryEntry>>, ApiError>;

    async fn fetch_prediction(
        &self,
        prediction_id: Uuid,
    ) -> Result<ApiResponse<StoredPrediction>, ApiError>;

    async fn ping(&self) -> Result<ApiResponse<serde_json::Value>, ApiError>;
}
