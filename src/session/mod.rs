mod ledger;

pub use ledger::SessionLedger;

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, NutrientTotals, PredictionResult, UserProfile};
use crate::predictor::{self, ScorePredictor};

/// One person's interactive session: their profile plus the foods logged so far.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: UserProfile,
    ledger: SessionLedger,
}

impl Session {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            ledger: SessionLedger::new(),
        }
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    pub fn add(&mut self, item: &FoodItem) {
        self.ledger.add(item);
    }

    pub fn totals(&self) -> NutrientTotals {
        self.ledger.aggregate()
    }

    /// Whether a prediction is meaningful yet.
    pub fn can_predict(&self) -> bool {
        !self.ledger.is_empty()
    }

    /// Predict the health score for everything logged so far.
    ///
    /// Refuses to call the model while the ledger is empty.
    pub fn predict<P: ScorePredictor + ?Sized>(&self, model: &P) -> Result<PredictionResult> {
        if !self.can_predict() {
            return Err(NutriError::EmptyLedger);
        }
        predictor::predict(model, &self.profile, &self.ledger.aggregate())
    }
}
