//! Display-ready pieces derived from results and history entries.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::models::{HistoryEntry, PredictionResult};

const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `68.0` renders as `68%`, `67.5` as `67.5%`.
pub fn format_score(score: f64) -> String {
    format!("{score}%")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreDisplay {
    pub score_label: String,
    pub level: String,
    pub level_class: String,
}

impl ScoreDisplay {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            score_label: format_score(result.score),
            level: result.level.to_string(),
            level_class: result.level.css_class(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub text: String,
}

pub fn detail_rows(result: &PredictionResult) -> Vec<DetailRow> {
    let Some(details) = &result.details else {
        return Vec::new();
    };
    [
        ("Age match", &details.age_compatibility),
        ("Common interests", &details.interests),
        ("Communication quality", &details.communication_quality),
        ("Values", &details.values),
    ]
    .into_iter()
    .map(|(label, text)| DetailRow {
        label: label.to_string(),
        text: text.clone(),
    })
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRow {
    pub captured_at: String,
    pub score_label: String,
    pub level: String,
    pub level_class: String,
}

impl HistoryRow {
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        let display = ScoreDisplay::from_result(&entry.result);
        Self {
            captured_at: entry
                .timestamp
                .with_timezone(&Local)
                .format(HISTORY_TIME_FORMAT)
                .to_string(),
            score_label: display.score_label,
            level: display.level,
            level_class: display.level_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Details, Level};
    use chrono::Utc;

    fn result(score: f64, level: &str) -> PredictionResult {
        PredictionResult {
            score,
            level: Level::new(level),
            details: None,
            inputs: None,
        }
    }

    #[test]
    fn whole_scores_have_no_decimal_point() {
        assert_eq!(format_score(68.0), "68%");
        assert_eq!(format_score(67.53), "67.53%");
        assert_eq!(format_score(0.0), "0%");
    }

    #[test]
    fn display_lowercases_level_class() {
        let display = ScoreDisplay::from_result(&result(81.0, "High"));
        assert_eq!(display.score_label, "81%");
        assert_eq!(display.level, "High");
        assert_eq!(display.level_class, "high");
    }

    #[test]
    fn detail_rows_follow_dimension_order() {
        let mut r = result(50.0, "Medium");
        assert!(detail_rows(&r).is_empty());

        r.details = Some(Details {
            age_compatibility: "close in age".into(),
            interests: "few overlaps".into(),
            communication_quality: "talks well".into(),
            values: "aligned".into(),
        });
        let rows = detail_rows(&r);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].text, "close in age");
        assert_eq!(rows[3].label, "Values");
    }

    #[test]
    fn history_row_uses_score_and_level() {
        let entry = HistoryEntry {
            id: None,
            timestamp: Utc::now(),
            result: result(42.0, "Low"),
        };
        let row = HistoryRow::from_entry(&entry);
        assert_eq!(row.score_label, "42%");
        assert_eq!(row.level_class, "low");
        assert_eq!(row.captured_at.len(), "2024-01-01 00:00:00".len());
    }
}
