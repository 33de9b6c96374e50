//! The injectable speech-engine capability.

pub mod espeak;

use crate::error::SpeechError;

/// Callback fired once when an utterance finishes playing naturally.
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// One utterance handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Markup-stripped text to vocalize.
    pub text: String,
    /// Locale tag selecting the voice (for example `hi-IN`).
    pub locale: String,
    /// Playback rate relative to the engine's normal speed.
    pub rate: f32,
}

/// A speech synthesis engine.
///
/// Implementations own the platform resource. `speak` must not block on
/// playback; completion is reported through the callback exactly once, and
/// not at all for utterances interrupted by `cancel`.
pub trait SpeechEngine: Send + Sync {
    /// Starts playing one utterance, replacing any still in progress.
    fn speak(&self, utterance: &Utterance, on_done: CompletionCallback) -> Result<(), SpeechError>;

    /// Interrupts the active utterance, if any, with immediate effect.
    fn cancel(&self);
}
