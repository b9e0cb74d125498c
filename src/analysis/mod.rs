pub mod chart;
pub mod config;
pub mod recommendations;
pub mod summary;

pub use chart::{to_chart_series, ChartAxis, ChartSeries};
pub use config::RecommendationConfig;
pub use recommendations::{
    derive_recommendations, recommendations_for, Recommendation, RecommendationKind,
};
pub use summary::{detail_rows, format_score, DetailRow, HistoryRow, ScoreDisplay};
