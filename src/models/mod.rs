pub mod history;
pub mod prediction;

pub use history::HistoryEntry;
pub use prediction::{Details, Level, PredictionInput, PredictionOutcome, PredictionResult, Tier};
