use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostError {
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("{0} must have at least one item")]
    ItemRequired(String),

    #[error("{0} must have at least one sales channel")]
    ChannelRequired(String),

    #[error("Unit '{unit}' is not compatible with '{target}'")]
    UnitIncompatible { unit: String, target: String },

    #[error("Ingredient '{0}' is consumed by count but has no weight per unit")]
    MissingWeightPerUnit(String),

    #[error("Non-positive yield: {0}")]
    NonPositiveYield(String),

    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CostError {
    /// Deterministic rejections raised by the costing engine itself.
    ///
    /// Retrying one of these without changing the snapshot yields the same error.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CostError::InvalidReference(_)
                | CostError::ItemRequired(_)
                | CostError::ChannelRequired(_)
                | CostError::UnitIncompatible { .. }
                | CostError::MissingWeightPerUnit(_)
                | CostError::NonPositiveYield(_)
                | CostError::IndexOutOfRange(_)
                | CostError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CostError>;
