/// Thresholds for improvement suggestions.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// At or above this score only the affirmative message is produced.
    pub affirmative_score: f64,

    /// A dimension strictly below its threshold gets a suggestion.
    pub communication_threshold: f64,
    pub common_interests_threshold: f64,
    pub values_alignment_threshold: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            affirmative_score: 75.0,
            communication_threshold: 0.6,
            common_interests_threshold: 0.7,
            values_alignment_threshold: 0.7,
        }
    }
}
