//! Uploaded diagnostic reports.

use super::TreatmentPlanError;
use crate::assistant::domain::InlineData;

/// MIME types the model accepts for report analysis.
pub const ACCEPTED_REPORT_TYPES: [&str; 6] = [
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/heic",
    "image/heif",
    "application/pdf",
];

/// A report file ready to be sent for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportUpload {
    file_name: String,
    mime_type: String,
    content: Vec<u8>,
}

impl ReportUpload {
    /// Validates an uploaded file.
    ///
    /// The MIME type is compared case-insensitively and stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`TreatmentPlanError::InvalidReport`] when the content is empty
    /// or the MIME type is not in [`ACCEPTED_REPORT_TYPES`].
    pub fn new(
        file_name: impl Into<String>,
        mime_type: &str,
        content: Vec<u8>,
    ) -> Result<Self, TreatmentPlanError> {
        let normalized = mime_type.trim().to_ascii_lowercase();
        if !ACCEPTED_REPORT_TYPES.contains(&normalized.as_str()) {
            return Err(TreatmentPlanError::InvalidReport(format!(
                "unsupported file type '{}'",
                mime_type.trim()
            )));
        }
        if content.is_empty() {
            return Err(TreatmentPlanError::InvalidReport(
                "file is empty".to_owned(),
            ));
        }

        Ok(Self {
            file_name: file_name.into(),
            mime_type: normalized,
            content,
        })
    }

    /// Guesses the MIME type from a file extension.
    #[must_use]
    pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "webp" => Some("image/webp"),
            "heic" => Some("image/heic"),
            "heif" => Some("image/heif"),
            "pdf" => Some("application/pdf"),
            _ => None,
        }
    }

    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the normalised MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` when there is no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Encodes the content as an inline model attachment.
    #[must_use]
    pub fn to_inline_data(&self) -> InlineData {
        InlineData::from_bytes(self.mime_type.clone(), &self.content)
    }
}
