use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four compatibility dimensions, each a fraction in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionInput {
    pub age_difference: f64,
    pub common_interests: f64,
    pub communication: f64,
    pub values_alignment: f64,
}

impl PredictionInput {
    pub const NEUTRAL: PredictionInput = PredictionInput {
        age_difference: 0.0,
        common_interests: 0.0,
        communication: 0.0,
        values_alignment: 0.0,
    };

    /// Values in axis order: age, interests, communication, values.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.age_difference,
            self.common_interests,
            self.communication,
            self.values_alignment,
        ]
    }
}

/// Service-assigned qualitative bucket. The tier set is owned by the service,
/// so unknown strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tier(&self) -> Option<Tier> {
        match self.0.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Tier::Low),
            "medium" => Some(Tier::Medium),
            "high" => Some(Tier::High),
            _ => None,
        }
    }

    /// Style hook for the view: the lowercased level string.
    pub fn css_class(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text commentary per dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Details {
    #[serde(default)]
    pub age_compatibility: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub communication_quality: String,
    #[serde(default)]
    pub values: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub score: f64,
    pub level: Level,
    #[serde(default)]
    pub details: Option<Details>,
    /// Echo of the originating input. History entries from the service may omit it.
    #[serde(default)]
    pub inputs: Option<PredictionInput>,
}

/// A live result plus the id the service stored it under, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionOutcome {
    pub prediction_id: Option<Uuid>,
    pub result: PredictionResult,
}
