//! Form-side validation and normalisation of the four 0-100 ratings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::PredictionInput;

pub const MAX_RAW_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be between 0 and {max}, got {value}", max = MAX_RAW_SCORE)]
    OutOfRange { field: &'static str, value: i64 },
}

/// Ratings exactly as entered, already range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScores {
    pub age_difference: u8,
    pub common_interests: u8,
    pub communication: u8,
    pub values_alignment: u8,
}

/// Form fields as the view sends them, before any parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawForm {
    #[serde(default)]
    pub age_difference: String,
    #[serde(default)]
    pub common_interests: String,
    #[serde(default)]
    pub communication: String,
    #[serde(default)]
    pub values_alignment: String,
}

impl RawScores {
    pub fn new(
        age_difference: u8,
        common_interests: u8,
        communication: u8,
        values_alignment: u8,
    ) -> Result<Self, InputError> {
        Ok(Self {
            age_difference: check_range("age_difference", age_difference.into())?,
            common_interests: check_range("common_interests", common_interests.into())?,
            communication: check_range("communication", communication.into())?,
            values_alignment: check_range("values_alignment", values_alignment.into())?,
        })
    }

    pub fn parse(form: &RawForm) -> Result<Self, InputError> {
        Ok(Self {
            age_difference: parse_field("age_difference", &form.age_difference)?,
            common_interests: parse_field("common_interests", &form.common_interests)?,
            communication: parse_field("communication", &form.communication)?,
            values_alignment: parse_field("values_alignment", &form.values_alignment)?,
        })
    }

    pub fn normalize(&self) -> PredictionInput {
        PredictionInput {
            age_difference: normalize_score(self.age_difference),
            common_interests: normalize_score(self.common_interests),
            communication: normalize_score(self.communication),
            values_alignment: normalize_score(self.values_alignment),
        }
    }
}

pub fn normalize_score(raw: u8) -> f64 {
    f64::from(raw) / 100.0
}

pub fn parse_field(field: &'static str, value: &str) -> Result<u8, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }
    let parsed: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        value: trimmed.to_string(),
    })?;
    check_range(field, parsed)
}

fn check_range(field: &'static str, value: i64) -> Result<u8, InputError> {
    if (0..=i64::from(MAX_RAW_SCORE)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(InputError::OutOfRange { field, value })
    }
}
