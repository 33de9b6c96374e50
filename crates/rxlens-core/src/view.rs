//! Read-only projection of controller state into user-facing labels.

use crate::domain::{AnalysisOutcome, Language};
use crate::services::{AnalysisState, UploadSession};

/// Label for the analysis action.
pub fn analyze_label(state: AnalysisState, language: Language) -> String {
    match state {
        AnalysisState::Submitting => format!("Analyzing in {language}..."),
        AnalysisState::Idle => "Analyze Prescription".to_owned(),
    }
}

/// Label for the read-aloud toggle.
pub const fn speak_label(speaking: bool) -> &'static str {
    if speaking { "Stop Audio" } else { "Read Aloud" }
}

/// Everything the presentation layer needs, derived from the live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub file_name: Option<String>,
    pub preview_size: Option<(u32, u32)>,
    pub analyze_label: String,
    pub analyze_enabled: bool,
    pub speak_label: &'static str,
    /// The read-aloud control only exists once a result is present.
    pub speak_available: bool,
    pub result: Option<AnalysisOutcome>,
}

impl ViewState {
    pub fn compose(
        session: &UploadSession,
        state: AnalysisState,
        outcome: Option<&AnalysisOutcome>,
        speaking: bool,
        language: Language,
    ) -> Self {
        Self {
            file_name: session.current_file().map(|file| file.file_name.clone()),
            preview_size: session
                .preview()
                .map(|preview| (preview.width(), preview.height())),
            analyze_label: analyze_label(state, language),
            analyze_enabled: state == AnalysisState::Idle,
            speak_label: speak_label(speaking),
            speak_available: outcome.is_some(),
            result: outcome.cloned(),
        }
    }
}
