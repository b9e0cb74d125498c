use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tauri::{Manager, State};
use uuid::Uuid;

use crate::{
    api::HttpPredictionService,
    config::ServiceConfig,
    history::commands::{get_history, get_history_rows, refresh_history},
    identity::{IdentityProvider, UserIdentity},
    log_info, log_warn,
    models::PredictionOutcome,
    settings::SettingsStore,
    share::{ShareOutcome, ShareTarget},
    utils::logging::init_logging,
    workflow::commands::{get_prediction_state, submit_prediction},
    AppState,
};

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::desktop";

/// The OS clipboard. Desktop hosts have no share sheet.
struct SystemClipboard;

#[async_trait]
impl ShareTarget for SystemClipboard {
    async fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|err| anyhow!("clipboard not available: {err}"))?;
            clipboard
                .set_text(text)
                .map_err(|err| anyhow!("clipboard write failed: {err}"))
        })
        .await?
    }
}

#[tauri::command]
fn get_user_id(state: State<AppState>) -> Result<UserIdentity, String> {
    Ok(state.identity.clone())
}

#[tauri::command]
async fn share_result(state: State<'_, AppState>) -> Result<ShareOutcome, String> {
    let snapshot = state.prediction.get_state().await;
    Ok(state.share.share(snapshot.outcome(), &SystemClipboard).await)
}

#[tauri::command]
async fn load_shared_prediction(
    state: State<'_, AppState>,
    prediction_id: String,
) -> Result<PredictionOutcome, String> {
    let prediction_id = Uuid::parse_str(&prediction_id).map_err(|e| e.to_string())?;
    state
        .load_shared_prediction(prediction_id)
        .await
        .map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    log_info!("Love prediction client starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow!(err))?;

                let identity = match SettingsStore::in_dir(&app_data_dir) {
                    Ok(store) => IdentityProvider::new(store),
                    Err(err) => {
                        log_warn!("Settings unavailable, identity will not persist: {err:#}");
                        IdentityProvider::in_memory()
                    }
                }
                .get_or_create();

                let config = ServiceConfig::from_env()?;
                log_info!("Using prediction service at {}", config.base_url);

                let service = Arc::new(HttpPredictionService::new(config.clone()));
                let state = AppState::new(
                    config,
                    identity,
                    service,
                    Arc::new(app.handle().clone()),
                );

                app.manage(state);

                let app_handle = app.handle().clone();
                tauri::async_runtime::spawn(async move {
                    app_handle.state::<AppState>().start().await;
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            get_user_id,
            get_prediction_state,
            submit_prediction,
            get_history,
            get_history_rows,
            refresh_history,
            share_result,
            load_shared_prediction,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
