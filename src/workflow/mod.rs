#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod hooks;
pub mod state;

pub use controller::{PredictionController, WorkflowSnapshot};
pub use hooks::{PostSuccessHook, RefreshHistoryHook};
pub use state::{WorkflowState, WorkflowStatus};
