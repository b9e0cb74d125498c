use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::log_warn;

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::events";

pub const PREDICTION_STATE_CHANGED: &str = "prediction-state-changed";
pub const HISTORY_UPDATED: &str = "history-updated";

/// Push channel towards the view. Emission is best-effort.
pub trait EventSink: Send + Sync {
    fn emit_json(&self, event: &str, payload: Value);
}

pub fn emit<T: Serialize>(sink: &dyn EventSink, event: &str, payload: &T) {
    match serde_json::to_value(payload) {
        Ok(value) => sink.emit_json(event, value),
        Err(err) => log_warn!("Dropping {event} event, payload did not serialize: {err}"),
    }
}

/// Keeps every emitted event; used by headless embeddings and tests.
#[derive(Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<(String, Value)>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|(name, _)| name).collect()
    }
}

impl EventSink for MemoryEventSink {
    fn emit_json(&self, event: &str, payload: Value) {
        let mut guard = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push((event.to_string(), payload));
    }
}

#[cfg(feature = "desktop")]
impl EventSink for tauri::AppHandle {
    fn emit_json(&self, event: &str, payload: Value) {
        use tauri::Emitter;

        if let Err(err) = self.emit(event, payload) {
            log_warn!("Failed to emit {event}: {err}");
        }
    }
}
