use serde::{Deserialize, Serialize};

/// Error body returned by the pricing endpoints: `{ "error": "<message>" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Fallback body for validation failures that carry no detail.
    pub fn generic() -> Self {
        Self::new("Error")
    }

    /// Fallback body for IO and other unexpected server failures.
    pub fn unknown() -> Self {
        Self::new("Unknown Error")
    }
}
