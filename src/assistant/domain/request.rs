//! Requests sent to the generative model.

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

/// Binary attachment sent inline with a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    mime_type: String,
    data: String,
}

impl InlineData {
    /// Encodes raw bytes as a base64 attachment.
    #[must_use]
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Returns the attachment MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the base64-encoded payload.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Prompt plus optional inline attachments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelRequest {
    prompt: String,
    attachments: Vec<InlineData>,
}

impl ModelRequest {
    /// Creates a text-only request.
    #[must_use]
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            attachments: Vec::new(),
        }
    }

    /// Adds an inline attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: InlineData) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Returns the prompt text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the attachments in send order.
    #[must_use]
    pub fn attachments(&self) -> &[InlineData] {
        &self.attachments
    }
}
