use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::identity::UserIdentity;
use crate::log_debug;
use crate::models::HistoryEntry;

use super::protocol::{
    ApiResponse, PredictionData, PredictionRequest, StoredPrediction, HEALTH_PATH, HISTORY_PATH,
    PREDICTIONS_PATH, PREDICT_PATH,
};
use super::{ApiError, PredictionService};

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::api";

/// reqwest-backed client. Relies on the transport's own timeouts only.
#[derive(Clone)]
pub struct HttpPredictionService {
    client: Client,
    config: ServiceConfig,
}

impl HttpPredictionService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str, segment: Option<&str>) -> Result<Url, ApiError> {
        let raw = self.config.endpoint(path);
        let mut url = Url::parse(&raw).map_err(|_| ApiError::Url(raw.clone()))?;
        if let Some(segment) = segment {
            url.path_segments_mut()
                .map_err(|_| ApiError::Url(raw.clone()))?
                .push(segment);
        }
        Ok(url)
    }

    /// Reads the JSON envelope regardless of HTTP status; the service reports
    /// failures through its `status` field.
    async fn read_envelope<T: DeserializeOwned>(
        url: &Url,
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, ApiError> {
        let http_status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        log_debug!("{} responded {} ({} bytes)", url, http_status, body.len());
        serde_json::from_str(&body).map_err(|err| ApiError::Decode {
            url: url.to_string(),
            reason: format!("HTTP {http_status}: {err}"),
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<T>, ApiError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::read_envelope(&url, response).await
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<ApiResponse<PredictionData>, ApiError> {
        let url = self.url(PREDICT_PATH, None)?;
        let response = self
            .client
            .post(url.clone())
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::read_envelope(&url, response).await
    }

    async fn fetch_history(
        &self,
        user_id: &UserIdentity,
    ) -> Result<ApiResponse<Vec<HistoryEntry>>, ApiError> {
        let url = self.url(HISTORY_PATH, Some(user_id.as_str()))?;
        self.get(url).await
    }

    async fn fetch_prediction(
        &self,
        prediction_id: Uuid,
    ) -> Result<ApiResponse<StoredPrediction>, ApiError> {
        let url = self.url(PREDICTIONS_PATH, Some(&prediction_id.to_string()))?;
        self.get(url).await
    }

    async fn ping(&self) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let url = self.url(HEALTH_PATH, None)?;
        self.get(url).await
    }
}
