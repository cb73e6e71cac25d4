use crate::errors::{api::ApiError, validation::ValidationError};
use thiserror::Error;

/// Error type of the product creation and quantity adjustment flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FlowError {
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Validation(err) => err.message().to_string(),
            FlowError::Api(err) => err.user_message(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FlowError::Validation(_))
    }
}
