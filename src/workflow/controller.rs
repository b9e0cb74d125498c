use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    analysis::{
        detail_rows, recommendations_for, to_chart_series, ChartSeries, DetailRow,
        Recommendation, RecommendationConfig, ScoreDisplay,
    },
    api::{PredictionRequest, PredictionService},
    events::{self, EventSink, PREDICTION_STATE_CHANGED},
    identity::UserIdentity,
    models::PredictionInput,
};
use crate::{log_error, log_info, log_warn};

use super::{hooks::PostSuccessHook, WorkflowState};

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::workflow";

/// Shown when the service reports failure without a message.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed";
/// Shown for transport and decode failures; the cause is only logged.
pub const TRANSPORT_FAILED_MESSAGE: &str = "Prediction failed, please try again";

/// Workflow state plus everything the view derives from it, recomputed per call.
#[derive(Debug, Serialize, Clone)]
pub struct WorkflowSnapshot {
    pub state: WorkflowState,
    pub display: Option<ScoreDisplay>,
    pub details: Vec<DetailRow>,
    pub chart: ChartSeries,
    pub recommendations: Vec<Recommendation>,
}

impl WorkflowSnapshot {
    pub fn from_state(state: WorkflowState, config: &RecommendationConfig) -> Self {
        let result = state.result();
        Self {
            display: result.map(ScoreDisplay::from_result),
            details: result.map(detail_rows).unwrap_or_default(),
            chart: to_chart_series(result),
            recommendations: result
                .map(|result| recommendations_for(result, config))
                .unwrap_or_default(),
            state,
        }
    }
}

/// The service's own text when it sent any, otherwise the generic fallback.
fn service_message(message: Option<String>) -> String {
    message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| PREDICTION_FAILED_MESSAGE.to_string())
}

#[derive(Clone)]
pub struct PredictionController {
    state: Arc<Mutex<WorkflowState>>,
    service: Arc<dyn PredictionService>,
    events: Arc<dyn EventSink>,
    hooks: Vec<Arc<dyn PostSuccessHook>>,
    recommendations: Arc<RecommendationConfig>,
}

impl PredictionController {
    pub fn new(service: Arc<dyn PredictionService>, events: Arc<dyn EventSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(WorkflowState::new())),
            service,
            events,
            hooks: Vec::new(),
            recommendations: Arc::new(RecommendationConfig::default()),
        }
    }

    pub fn with_hook(mut self, hook: Arc<dyn PostSuccessHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub async fn get_state(&self) -> WorkflowState {
        self.state.lock().await.clone()
    }

    pub async fn get_snapshot(&self) -> WorkflowSnapshot {
        let state = self.get_state().await;
        WorkflowSnapshot::from_state(state, &self.recommendations)
    }

    /// One predict round trip.
    ///
    /// Returns `Err` only when another submission is still in flight; service
    /// and transport failures end in `WorkflowState::Failed`.
    pub async fn submit(
        &self,
        input: PredictionInput,
        user_id: &UserIdentity,
    ) -> Result<WorkflowSnapshot> {
        {
            let mut state = self.state.lock().await;
            state.begin_submission()?;
        }
        self.emit_state_changed().await;

        let request = PredictionRequest::new(input, user_id.clone());
        let response = self.service.predict(&request).await;

        let succeeded = {
            let mut state = self.state.lock().await;
            match response {
                Ok(response) if response.is_success() => {
                    let prediction_id = response.prediction_id;
                    match response.data {
                        Some(data) => {
                            let outcome = data.into_outcome(input, prediction_id);
                            log_info!(
                                "Prediction for {user_id}: {} ({})",
                                outcome.result.score,
                                outcome.result.level
                            );
                            state.succeed(outcome.clone());
                            Some(outcome)
                        }
                        None => {
                            log_warn!("Prediction reported success without data");
                            state.fail(service_message(response.message));
                            None
                        }
                    }
                }
                Ok(response) => {
                    log_warn!("Prediction rejected with status '{}'", response.status);
                    state.fail(service_message(response.message));
                    None
                }
                Err(err) => {
                    log_error!("Prediction request failed: {err}");
                    state.fail(TRANSPORT_FAILED_MESSAGE);
                    None
                }
            }
        };

        self.emit_state_changed().await;

        if let Some(outcome) = succeeded {
            for hook in &self.hooks {
                hook.on_prediction_succeeded(user_id, &outcome);
            }
        }

        Ok(self.get_snapshot().await)
    }

    async fn emit_state_changed(&self) {
        let snapshot = self.get_snapshot().await;
        events::emit(self.events.as_ref(), PREDICTION_STATE_CHANGED, &snapshot);
    }
}
