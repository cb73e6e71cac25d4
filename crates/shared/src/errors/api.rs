use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's detail, or the raw body text; `body`
    /// is the untouched response text.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds an `Http` error from a failed response body.
    ///
    /// JSON `detail` wins (strings verbatim, anything else as compact JSON), then a JSON
    /// `message` string, then the raw text. An empty body falls back to the status line.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let trimmed = body.trim();

        let message = if trimmed.is_empty() {
            match reason {
                Some(reason) => format!("HTTP {status} {reason}"),
                None => format!("HTTP {status}"),
            }
        } else {
            match serde_json::from_str::<Value>(trimmed) {
                Ok(Value::Object(map)) => match (map.get("detail"), map.get("message")) {
                    (Some(Value::String(detail)), _) => detail.clone(),
                    (Some(detail), _) if !detail.is_null() => detail.to_string(),
                    (_, Some(Value::String(message))) => message.clone(),
                    _ => trimmed.to_string(),
                },
                _ => trimmed.to_string(),
            }
        };

        ApiError::Http {
            status,
            message,
            body: body.to_string(),
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown inline next to the form that triggered the request.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Network(msg) => format!("Network error: {msg}"),
            ApiError::Decode(msg) => format!("Unexpected response: {msg}"),
        }
    }
}
