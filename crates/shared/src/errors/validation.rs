use thiserror::Error;
use validator::ValidationErrors;

/// Client-side input rejection. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Picks the first failing field in `field_order` so the reported message is stable.
    pub fn from_errors(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();

        let message = field_order
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .chain(field_errors.values())
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Validation failed".to_string());

        Self { message }
    }
}
