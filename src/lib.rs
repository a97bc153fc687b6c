pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod predictor;
pub mod session;

pub use catalog::Catalog;
pub use error::{NutriError, Result};
pub use models::{FoodItem, NutrientTotals, PredictionResult, UserProfile};
pub use session::{Session, SessionLedger};
