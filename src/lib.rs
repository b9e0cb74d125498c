pub mod analysis;
pub mod api;
pub mod config;
#[cfg(feature = "desktop")]
mod desktop;
pub mod events;
pub mod history;
pub mod identity;
pub mod input;
pub mod models;
pub mod settings;
pub mod share;
pub mod utils;
pub mod workflow;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use uuid::Uuid;

use api::PredictionService;
use config::ServiceConfig;
use events::EventSink;
use history::HistoryClient;
use identity::UserIdentity;
use models::PredictionOutcome;
use share::ShareExporter;
use workflow::{PredictionController, RefreshHistoryHook};

#[cfg(feature = "desktop")]
pub use desktop::run;

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch";

/// Single owner of all session state. Components receive their I/O through
/// the injected service and event sink.
pub struct AppState {
    pub config: ServiceConfig,
    pub identity: UserIdentity,
    pub(crate) service: Arc<dyn PredictionService>,
    pub prediction: PredictionController,
    pub history: HistoryClient,
    pub share: ShareExporter,
}

impl AppState {
    pub fn new(
        config: ServiceConfig,
        identity: UserIdentity,
        service: Arc<dyn PredictionService>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let history = HistoryClient::new(service.clone(), events.clone());
        let prediction = PredictionController::new(service.clone(), events)
            .with_hook(Arc::new(RefreshHistoryHook::new(history.clone())));
        let share = ShareExporter::new(&config);

        Self {
            config,
            identity,
            service,
            prediction,
            history,
            share,
        }
    }

    /// Startup I/O: a health check and the first history load. Neither can fail startup.
    pub async fn start(&self) {
        match self.service.ping().await {
            Ok(response) if response.is_success() => log_info!(
                "Prediction service at {} is up: {}",
                self.config.base_url,
                response.message.unwrap_or_default()
            ),
            Ok(response) => log_warn!(
                "Prediction service health check returned '{}'",
                response.status
            ),
            Err(err) => log_warn!("Prediction service unreachable: {err}"),
        }

        if self.history.refresh(&self.identity).await.is_err() {
            log_warn!("Starting with an empty history list");
        }
    }

    /// Looks up a stored prediction by id. Leaves the workflow state alone.
    pub async fn load_shared_prediction(&self, prediction_id: Uuid) -> Result<PredictionOutcome> {
        let response = self.service.fetch_prediction(prediction_id).await?;
        if !response.is_success() {
            return Err(anyhow!(response
                .message
                .unwrap_or_else(|| format!("prediction {prediction_id} not found"))));
        }
        response
            .data
            .map(|stored| stored.into_outcome(prediction_id))
            .ok_or_else(|| anyhow!("prediction {prediction_id} returned no data"))
    }
}
