use crate::history::HistoryClient;
use crate::identity::UserIdentity;
use crate::log_debug;
use crate::models::PredictionOutcome;

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::workflow";

/// Runs after a prediction has been committed to the workflow state.
///
/// The signature is synchronous on purpose: a hook can start background work
/// but cannot make the controller wait on it, so the displayed result never
/// depends on what the hook does.
pub trait PostSuccessHook: Send + Sync {
    fn on_prediction_succeeded(&self, user_id: &UserIdentity, outcome: &PredictionOutcome);
}

/// Re-fetches the history list in the background after every success.
pub struct RefreshHistoryHook {
    history: HistoryClient,
}

impl RefreshHistoryHook {
    pub fn new(history: HistoryClient) -> Self {
        Self { history }
    }
}

impl PostSuccessHook for RefreshHistoryHook {
    fn on_prediction_succeeded(&self, user_id: &UserIdentity, _outcome: &PredictionOutcome) {
        let history = self.history.clone();
        let user_id = user_id.clone();
        log_debug!("Scheduling history refresh for {user_id}");
        tokio::spawn(async move {
            // Failures are logged inside `refresh`; the workflow never sees them.
            let _ = history.refresh(&user_id).await;
        });
    }
}
