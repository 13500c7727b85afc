use thiserror::Error;

use models::errors::ModelError;

/// Client payload rejected before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("age must be a whole number between 1 and 120")]
    AgeOutOfRange,
}

/// The persistence call itself failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed id: {0}")]
    InvalidId(String),
    #[error("store error: {0}")]
    Backend(String),
}

impl From<ModelError> for StoreError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidId(id) => Self::InvalidId(id),
            ModelError::Db(msg) => Self::Backend(msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}
