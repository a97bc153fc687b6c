use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest score that counts as [`HealthCategory::Good`].
pub const GOOD_THRESHOLD: f64 = 4.0;

/// Lowest score that counts as [`HealthCategory::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 2.0;

/// Bounds of a valid model score.
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCategory {
    Good,
    Medium,
    Poor,
}

impl HealthCategory {
    /// Bucket a score. Every value maps to exactly one category; NaN is Poor.
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            HealthCategory::Good
        } else if score >= MEDIUM_THRESHOLD {
            HealthCategory::Medium
        } else {
            HealthCategory::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthCategory::Good => "Good",
            HealthCategory::Medium => "Medium",
            HealthCategory::Poor => "Poor",
        }
    }
}

impl fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub score: f64,
    pub category: HealthCategory,
}

impl PredictionResult {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            category: HealthCategory::from_score(score),
        }
    }

    /// Score as a fraction of the maximum, for progress display.
    pub fn fraction(&self) -> f64 {
        (self.score / MAX_SCORE).clamp(0.0, 1.0)
    }
}
