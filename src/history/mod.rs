#[cfg(feature = "desktop")]
pub mod commands;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use anyhow::{anyhow, Result};
use tokio::sync::Mutex;

use crate::api::PredictionService;
use crate::events::{self, EventSink, HISTORY_UPDATED};
use crate::identity::UserIdentity;
use crate::models::HistoryEntry;
use crate::{log_debug, log_info, log_warn};

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::history";

/// Latest list plus the generation of the fetch that produced it.
#[derive(Default)]
struct HistoryList {
    entries: Vec<HistoryEntry>,
    generation: u64,
}

/// Holds the user's prediction history as last returned by the service.
///
/// Each successful fetch replaces the whole list; a failed fetch leaves it as is.
/// A fetch that started before the one already applied is discarded.
/// Nothing here touches the prediction workflow state.
#[derive(Clone)]
pub struct HistoryClient {
    list: Arc<Mutex<HistoryList>>,
    next_generation: Arc<AtomicU64>,
    service: Arc<dyn PredictionService>,
    events: Arc<dyn EventSink>,
}

impl HistoryClient {
    pub fn new(service: Arc<dyn PredictionService>, events: Arc<dyn EventSink>) -> Self {
        Self {
            list: Arc::new(Mutex::new(HistoryList::default())),
            next_generation: Arc::new(AtomicU64::new(0)),
            service,
            events,
        }
    }

    pub async fn entries(&self) -> Vec<HistoryEntry> {
        self.list.lock().await.entries.clone()
    }

    /// Fetches the full list for `user_id` and swaps it in, unless a fetch
    /// started later has already landed. Returns the list now held.
    pub async fn refresh(&self, user_id: &UserIdentity) -> Result<Vec<HistoryEntry>> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let response = match self.service.fetch_history(user_id).await {
            Ok(response) => response,
            Err(err) => {
                log_warn!("History fetch for {user_id} failed: {err}");
                return Err(err.into());
            }
        };

        if !response.is_success() {
            log_warn!(
                "History fetch for {user_id} returned status '{}'",
                response.status
            );
            return Err(anyhow!("history service reported '{}'", response.status));
        }

        let fresh = response.data.unwrap_or_default();
        {
            let mut guard = self.list.lock().await;
            if guard.generation > generation {
                log_debug!(
                    "Discarding history fetch #{generation}, #{} already applied",
                    guard.generation
                );
                return Ok(guard.entries.clone());
            }
            guard.entries = fresh.clone();
            guard.generation = generation;
        }
        log_info!("History for {user_id} now has {} entries", fresh.len());
        events::emit(self.events.as_ref(), HISTORY_UPDATED, &fresh);

        Ok(fresh)
    }
}
