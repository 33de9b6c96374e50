//! Error types for speech playback.

/// Errors from the speech engine boundary.
///
/// The controller treats every variant as a silent degradation: the failure
/// is logged at debug level and playback is skipped.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// The synthesizer process could not be started.
    #[error("failed to start speech program '{program}': {source}")]
    EngineStart {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
