use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::models::{PredictionOutcome, PredictionResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WorkflowStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Predict lifecycle. At most one of result and error exists at any time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum WorkflowState {
    Idle,
    Submitting,
    Succeeded { outcome: PredictionOutcome },
    Failed { message: String },
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Idle
    }
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> WorkflowStatus {
        match self {
            WorkflowState::Idle => WorkflowStatus::Idle,
            WorkflowState::Submitting => WorkflowStatus::Submitting,
            WorkflowState::Succeeded { .. } => WorkflowStatus::Succeeded,
            WorkflowState::Failed { .. } => WorkflowStatus::Failed,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting)
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        match self {
            WorkflowState::Succeeded { outcome } => Some(outcome),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.outcome().map(|outcome| &outcome.result)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Enters `Submitting`, dropping any previous result or error.
    pub fn begin_submission(&mut self) -> Result<()> {
        if self.is_submitting() {
            bail!("a prediction is already in flight");
        }
        *self = WorkflowState::Submitting;
        Ok(())
    }

    pub fn succeed(&mut self, outcome: PredictionOutcome) {
        *self = WorkflowState::Succeeded { outcome };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = WorkflowState::Failed {
            message: message.into(),
        };
    }
}
