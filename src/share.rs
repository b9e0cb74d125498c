use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::format_score;
use crate::api::protocol::PREDICTIONS_PATH;
use crate::config::ServiceConfig;
use crate::log_error;
use crate::models::PredictionOutcome;

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::share";

pub const SHARE_TITLE: &str = "AI Love Prediction";
pub const COPIED_NOTICE: &str = "Result copied to clipboard";
pub const SHARE_FAILED_NOTICE: &str = "Sharing failed, please copy manually";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

/// What the user should be told after a share attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ShareOutcome {
    NothingToShare,
    Shared,
    Copied { notice: String },
    Failed { notice: String },
}

/// Host capabilities used for sharing. Hosts without a share sheet only
/// implement the clipboard.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    fn supports_native_share(&self) -> bool {
        false
    }

    async fn native_share(&self, _payload: &SharePayload) -> Result<()> {
        bail!("native share is not available on this host")
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct ShareExporter {
    base_url: String,
}

impl ShareExporter {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    pub fn payload(&self, outcome: &PredictionOutcome) -> SharePayload {
        let result = &outcome.result;
        SharePayload {
            title: SHARE_TITLE.to_string(),
            text: format!(
                "My AI love prediction: compatibility {}, level: {}",
                format_score(result.score),
                result.level
            ),
            url: outcome
                .prediction_id
                .map(|id| format!("{}/{}/{}", self.base_url, PREDICTIONS_PATH, id)),
        }
    }

    /// Native share when the host has one, clipboard otherwise. Never fails outward.
    pub async fn share(
        &self,
        outcome: Option<&PredictionOutcome>,
        target: &dyn ShareTarget,
    ) -> ShareOutcome {
        let Some(outcome) = outcome else {
            return ShareOutcome::NothingToShare;
        };
        let payload = self.payload(outcome);

        let attempt = if target.supports_native_share() {
            target.native_share(&payload).await.map(|()| ShareOutcome::Shared)
        } else {
            target
                .copy_to_clipboard(&payload.text)
                .await
                .map(|()| ShareOutcome::Copied {
                    notice: COPIED_NOTICE.to_string(),
                })
        };

        attempt.unwrap_or_else(|err| {
            log_error!("Sharing failed: {err:#}");
            ShareOutcome::Failed {
                notice: SHARE_FAILED_NOTICE.to_string(),
            }
        })
    }
}
