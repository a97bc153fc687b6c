mod food;
mod prediction;
mod profile;

pub use food::{FoodItem, NutrientTotals};
pub use prediction::{
    HealthCategory, PredictionResult, GOOD_THRESHOLD, MAX_SCORE, MEDIUM_THRESHOLD, MIN_SCORE,
};
pub use profile::{
    Gender, UserProfile, AGE_RANGE, DEFAULT_AGE, DEFAULT_HEIGHT, DEFAULT_WEIGHT, HEIGHT_RANGE,
    WEIGHT_RANGE,
};
