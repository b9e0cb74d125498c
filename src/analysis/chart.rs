use serde::{Deserialize, Serialize};

use crate::models::{PredictionInput, PredictionResult};

pub const SERIES_LABEL: &str = "Compatibility analysis";
pub const AXIS_LABELS: [&str; 4] = [
    "Age match",
    "Common interests",
    "Communication quality",
    "Values alignment",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartAxis {
    pub label: String,
    pub value: f64,
}

/// Radar series on a 0-100 scale, axes always in `AXIS_LABELS` order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub axes: Vec<ChartAxis>,
}

impl ChartSeries {
    pub fn values(&self) -> Vec<f64> {
        self.axes.iter().map(|axis| axis.value).collect()
    }
}

/// No result, or a result without echoed inputs, maps to the all-zero radar.
pub fn to_chart_series(result: Option<&PredictionResult>) -> ChartSeries {
    let input = result
        .and_then(|result| result.inputs)
        .unwrap_or(PredictionInput::NEUTRAL);

    let axes = AXIS_LABELS
        .iter()
        .zip(input.as_array())
        .map(|(label, fraction)| ChartAxis {
            label: (*label).to_string(),
            value: fraction * 100.0,
        })
        .collect();

    ChartSeries {
        label: SERIES_LABEL.to_string(),
        axes,
    }
}
