use serde::{Deserialize, Serialize};

use super::config::RecommendationConfig;
use crate::models::{PredictionInput, PredictionResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationKind {
    Maintain,
    Communication,
    CommonInterests,
    ValuesAlignment,
}

impl RecommendationKind {
    pub fn message(&self) -> &'static str {
        match self {
            RecommendationKind::Maintain => "Keep up your current quality of interaction",
            RecommendationKind::Communication => {
                "Make more room for deep conversations to improve communication quality"
            }
            RecommendationKind::CommonInterests => "Try developing more shared interests and hobbies",
            RecommendationKind::ValuesAlignment => {
                "Spend more time discussing future plans and values"
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

impl From<RecommendationKind> for Recommendation {
    fn from(kind: RecommendationKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

/// Suggestions for a score and its inputs.
///
/// High scores get one affirmative message. Otherwise communication, common
/// interests and values alignment are checked in that order; age never yields
/// a suggestion. An empty list is a valid answer.
pub fn derive_recommendations(
    score: f64,
    inputs: &PredictionInput,
    config: &RecommendationConfig,
) -> Vec<Recommendation> {
    if score >= config.affirmative_score {
        return vec![RecommendationKind::Maintain.into()];
    }

    let checks = [
        (
            inputs.communication,
            config.communication_threshold,
            RecommendationKind::Communication,
        ),
        (
            inputs.common_interests,
            config.common_interests_threshold,
            RecommendationKind::CommonInterests,
        ),
        (
            inputs.values_alignment,
            config.values_alignment_threshold,
            RecommendationKind::ValuesAlignment,
        ),
    ];

    checks
        .into_iter()
        .filter(|(value, threshold, _)| value < threshold)
        .map(|(_, _, kind)| kind.into())
        .collect()
}

/// Same as `derive_recommendations`, tolerating results that carry no inputs.
pub fn recommendations_for(
    result: &PredictionResult,
    config: &RecommendationConfig,
) -> Vec<Recommendation> {
    match &result.inputs {
        Some(inputs) => derive_recommendations(result.score, inputs, config),
        None if result.score >= config.affirmative_score => {
            vec![RecommendationKind::Maintain.into()]
        }
        None => Vec::new(),
    }
}
