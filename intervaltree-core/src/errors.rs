use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntervalError {
    /// Raised by the directional predicates (`lt`, `le`, `gt`, `ge`) when
    /// either operand is empty.
    #[error("Cannot compare null intervals")]
    NullInterval,

    #[error("Error parsing interval: {0}")]
    ReprParse(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IntervalError>;
