use tauri::State;

use crate::{analysis::HistoryRow, models::HistoryEntry, AppState};

#[tauri::command]
pub async fn get_history(state: State<'_, AppState>) -> Result<Vec<HistoryEntry>, String> {
    Ok(state.history.entries().await)
}

#[tauri::command]
pub async fn get_history_rows(state: State<'_, AppState>) -> Result<Vec<HistoryRow>, String> {
    let entries = state.history.entries().await;
    Ok(entries.iter().map(HistoryRow::from_entry).collect())
}

#[tauri::command]
pub async fn refresh_history(state: State<'_, AppState>) -> Result<Vec<HistoryEntry>, String> {
    state
        .history
        .refresh(&state.identity)
        .await
        .map_err(|e| e.to_string())
}
