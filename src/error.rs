use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Failed to load food catalog: {0}")]
    DataLoad(String),

    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    InferenceSchema(String),

    #[error("No foods recorded yet; add at least one food before predicting")]
    EmptyLedger,

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, NutriError>;
