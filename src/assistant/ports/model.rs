//! Generative-model port.

use crate::assistant::domain::ModelRequest;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for generative-model operations.
pub type GenerativeModelResult<T> = Result<T, GenerativeModelError>;

/// Text-generation contract.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Sends the prompt and attachments and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeModelError`] when the call fails or the model
    /// answers without text.
    async fn generate(&self, request: &ModelRequest) -> GenerativeModelResult<String>;
}

/// Errors returned by generative-model adapters.
#[derive(Debug, Clone, Error)]
pub enum GenerativeModelError {
    /// The request never produced an HTTP response.
    #[error("model transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The service answered with an error status.
    #[error("model API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the service.
        message: String,
    },

    /// The response body could not be interpreted.
    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    /// The model answered without any text.
    #[error("model returned no text")]
    EmptyResponse,

    /// The call did not finish in time.
    #[error("model call timed out after {0:?}")]
    TimedOut(Duration),

    /// The adapter is missing required settings.
    #[error("model is not configured: {0}")]
    Configuration(String),
}

impl GenerativeModelError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` when repeating the call may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::TimedOut(_) => true,
            Self::Api { status, .. } => is_retryable_status(*status),
            Self::InvalidResponse(_) | Self::EmptyResponse | Self::Configuration(_) => false,
        }
    }
}

/// Returns `true` for HTTP statuses worth retrying.
#[must_use]
pub const fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}
