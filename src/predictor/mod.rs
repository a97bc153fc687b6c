pub mod features;
mod forest;

pub use features::{FeatureRecord, FeatureValue, FEATURE_NAMES};
pub use forest::{load_model, FeatureKind, FeatureSpec, ForestModel};

use tracing::{info, warn};

use crate::error::{NutriError, Result};
use crate::models::{NutrientTotals, PredictionResult, UserProfile, MAX_SCORE, MIN_SCORE};

/// A frozen model that scores one feature record.
pub trait ScorePredictor {
    /// Run single-record inference and return the raw score.
    fn predict_score(&self, record: &FeatureRecord) -> Result<f64>;
}

impl<P: ScorePredictor + ?Sized> ScorePredictor for &P {
    fn predict_score(&self, record: &FeatureRecord) -> Result<f64> {
        (**self).predict_score(record)
    }
}

impl<P: ScorePredictor + ?Sized> ScorePredictor for Box<P> {
    fn predict_score(&self, record: &FeatureRecord) -> Result<f64> {
        (**self).predict_score(record)
    }
}

/// Score a day's intake for a profile and bucket the result.
///
/// Errors from the backend propagate unchanged. A score outside 1..=5 is
/// reported as an inference error rather than shown.
pub fn predict<P: ScorePredictor + ?Sized>(
    predictor: &P,
    profile: &UserProfile,
    totals: &NutrientTotals,
) -> Result<PredictionResult> {
    let record = FeatureRecord::from_intake(profile, totals);

    let score = predictor.predict_score(&record).inspect_err(|e| {
        warn!(error = %e, "Health score inference failed");
    })?;

    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(NutriError::InferenceSchema(format!(
            "model returned score {} outside {}..={}",
            score, MIN_SCORE, MAX_SCORE
        )));
    }

    let result = PredictionResult::from_score(score);
    info!(score, category = %result.category, "Predicted health score");
    Ok(result)
}
