use tauri::State;

use crate::{
    input::{RawForm, RawScores},
    workflow::{PredictionController, WorkflowSnapshot},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> PredictionController {
    state.prediction.clone()
}

#[tauri::command]
pub async fn get_prediction_state(state: State<'_, AppState>) -> Result<WorkflowSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.get_snapshot().await)
}

/// Validation errors are returned to the form and never touch the workflow state.
#[tauri::command]
pub async fn submit_prediction(
    state: State<'_, AppState>,
    form: RawForm,
) -> Result<WorkflowSnapshot, String> {
    let raw = RawScores::parse(&form).map_err(|e| e.to_string())?;
    let controller = controller_from_state(&state);
    controller
        .submit(raw.normalize(), &state.identity)
        .await
        .map_err(|e| e.to_string())
}
