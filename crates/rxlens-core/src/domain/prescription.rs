//! Prescription submissions and their analysis outcomes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::Language;

/// An image file chosen by the user for analysis.
///
/// The bytes are opaque at this layer. The selection UI restricts files to
/// image MIME types; the analysis service is the final authority on whether
/// it can read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionFile {
    /// Name the file was selected under, forwarded with the upload.
    pub file_name: String,
    /// MIME type reported by the selection UI (for example `image/jpeg`).
    pub mime_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl PrescriptionFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Inputs to one analysis submission, snapshotted at submit time.
///
/// Later form edits (file, allergies, language) do not touch a request that
/// is already in flight.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file: Arc<PrescriptionFile>,
    pub details: String,
    pub language: Language,
}

impl AnalysisRequest {
    pub fn new(file: Arc<PrescriptionFile>, details: impl Into<String>, language: Language) -> Self {
        Self {
            file,
            details: details.into(),
            language,
        }
    }
}

/// What one settled submission produced: the report markdown, or the fixed
/// failure message shown in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// Markdown report returned by the analysis service, verbatim.
    Report(String),
    /// User-facing message standing in for any failed submission.
    Failure(String),
}

impl AnalysisOutcome {
    /// The displayable (and speakable) text of this outcome.
    pub fn text(&self) -> &str {
        match self {
            Self::Report(text) | Self::Failure(text) => text,
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
