#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tokio::sync::Notify;
use uuid::Uuid;

use lovematch_lib::api::{
    ApiError, ApiResponse, PredictionData, PredictionRequest, PredictionService, StoredPrediction,
};
use lovematch_lib::identity::UserIdentity;
use lovematch_lib::models::{Details, HistoryEntry, Level, PredictionInput, PredictionResult};

/// Canned reply for one endpoint.
#[derive(Clone)]
pub enum Reply<T> {
    Envelope(ApiResponse<T>),
    Malformed,
}

impl<T> Reply<T> {
    fn into_result(self, url: &str) -> Result<ApiResponse<T>, ApiError> {
        match self {
            Reply::Envelope(response) => Ok(response),
            Reply::Malformed => Err(ApiError::Decode {
                url: url.to_string(),
                reason: "expected value at line 1 column 1".to_string(),
            }),
        }
    }
}

/// In-memory stand-in for the prediction service.
pub struct StubService {
    pub predict_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    predict_replies: Mutex<VecDeque<Reply<PredictionData>>>,
    history_reply: Mutex<Reply<Vec<HistoryEntry>>>,
    queued_history: Mutex<VecDeque<(Reply<Vec<HistoryEntry>>, Option<Arc<Notify>>)>>,
    stored_reply: Mutex<Reply<StoredPrediction>>,
    ping_reply: Mutex<Reply<Value>>,
    requests: Mutex<Vec<Value>>,
    gate: Option<Arc<Notify>>,
}

impl StubService {
    pub fn new() -> Self {
        Self {
            predict_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            predict_replies: Mutex::new(VecDeque::new()),
            history_reply: Mutex::new(Reply::Envelope(ApiResponse::success(Vec::new()))),
            queued_history: Mutex::new(VecDeque::new()),
            stored_reply: Mutex::new(Reply::Envelope(ApiResponse::failure(Some(
                "Prediction not found",
            )))),
            ping_reply: Mutex::new(Reply::Envelope(ApiResponse {
                status: "success".to_string(),
                data: None,
                message: Some("backend is running".to_string()),
                prediction_id: None,
            })),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Predict calls block until the returned `Notify` is signalled.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let mut stub = Self::new();
        stub.gate = Some(gate.clone());
        (stub, gate)
    }

    pub fn push_predict(&self, reply: Reply<PredictionData>) {
        self.predict_replies.lock().unwrap().push_back(reply);
    }

    pub fn set_history(&self, reply: Reply<Vec<HistoryEntry>>) {
        *self.history_reply.lock().unwrap() = reply;
    }

    /// Reply for the next history fetch only; falls back to `set_history` after.
    pub fn push_history(&self, reply: Reply<Vec<HistoryEntry>>) {
        self.queued_history.lock().unwrap().push_back((reply, None));
    }

    /// Like `push_history`, but that fetch blocks until the returned `Notify`
    /// is signalled.
    pub fn push_history_gated(&self, reply: Reply<Vec<HistoryEntry>>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.queued_history
            .lock()
            .unwrap()
            .push_back((reply, Some(gate.clone())));
        gate
    }

    pub fn set_stored(&self, reply: Reply<StoredPrediction>) {
        *self.stored_reply.lock().unwrap() = reply;
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn predict_count(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn history_count(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionService for StubService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<ApiResponse<PredictionData>, ApiError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self
            .predict_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Malformed);
        reply.into_result("stub://api/predict")
    }

    async fn fetch_history(
        &self,
        _user_id: &UserIdentity,
    ) -> Result<ApiResponse<Vec<HistoryEntry>>, ApiError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        let queued = self.queued_history.lock().unwrap().pop_front();
        let reply = match queued {
            Some((reply, gate)) => {
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                reply
            }
            None => self.history_reply.lock().unwrap().clone(),
        };
        reply.into_result("stub://api/history")
    }

    async fn fetch_prediction(
        &self,
        _prediction_id: Uuid,
    ) -> Result<ApiResponse<StoredPrediction>, ApiError> {
        let reply = self.stored_reply.lock().unwrap().clone();
        reply.into_result("stub://api/predictions")
    }

    async fn ping(&self) -> Result<ApiResponse<Value>, ApiError> {
        let reply = self.ping_reply.lock().unwrap().clone();
        reply.into_result("stub://api/test")
    }
}

pub fn medium_result_data(inputs: Option<PredictionInput>) -> PredictionData {
    PredictionData {
        score: 68.0,
        level: Level::new("medium"),
        details: Some(Details {
            age_compatibility: "Age gap is comfortable".to_string(),
            interests: "Plenty of shared interests".to_string(),
            communication_quality: "Communication needs work".to_string(),
            values: "Values differ somewhat".to_string(),
        }),
        inputs,
    }
}

pub fn history_entry(score: f64, level: &str) -> HistoryEntry {
    HistoryEntry {
        id: Some(Uuid::new_v4().to_string()),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        result: PredictionResult {
            score,
            level: Level::new(level),
            details: None,
            inputs: None,
        },
    }
}

pub fn sample_input() -> PredictionInput {
    PredictionInput {
        age_difference: 0.8,
        common_interests: 0.7,
        communication: 0.5,
        values_alignment: 0.6,
    }
}

pub fn sample_request_json(user_id: &str) -> Value {
    json!({
        "age_difference": 0.8,
        "common_interests": 0.7,
        "communication": 0.5,
        "values_alignment": 0.6,
        "user_id": user_id
    })
}

/// Lets spawned background tasks run on the current-thread test runtime.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
