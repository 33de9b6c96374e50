//! Speech playback controller: one utterance at a time, toggle to cancel.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use rxlens_core::Language;

use crate::backend::{SpeechEngine, Utterance};
use crate::text_utils;

/// Fixed playback rate for report read-aloud.
pub const DEFAULT_SPEECH_RATE: f32 = 0.9;

/// Playback states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechState {
    #[default]
    Idle,
    Speaking,
}

/// Events emitted on the controller's channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// The controller moved between `Idle` and `Speaking`.
    StateChanged(SpeechState),
    /// An utterance started playing.
    SpeakingStarted { locale: String },
    /// The active utterance finished or was cancelled.
    SpeakingFinished,
}

/// Controller configuration.
#[derive(Debug, Clone, Copy)]
pub struct SpeechConfig {
    /// Playback rate handed to the engine with every utterance.
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SPEECH_RATE,
        }
    }
}

impl SpeechConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }
}

/// Owns the single speech session and the engine's play/cancel state.
///
/// State is computed from the active session's liveness flag rather than
/// stored, so natural completion is observable immediately, before the
/// events are drained.
pub struct SpeechController {
    engine: Box<dyn SpeechEngine>,
    config: SpeechConfig,
    session: Option<(Utterance, Arc<AtomicBool>)>,
    event_tx: mpsc::UnboundedSender<SpeechEvent>,
}

impl SpeechController {
    /// Creates the controller and the receiving end of its event channel.
    pub fn new(
        engine: Box<dyn SpeechEngine>,
        config: SpeechConfig,
    ) -> (Self, mpsc::UnboundedReceiver<SpeechEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (
            Self {
                engine,
                config,
                session: None,
                event_tx,
            },
            event_rx,
        )
    }

    pub fn state(&self) -> SpeechState {
        if self.is_speaking() {
            SpeechState::Speaking
        } else {
            SpeechState::Idle
        }
    }

    /// Whether the active utterance is still playing.
    #[must_use]
    pub fn is_speaking(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|(_, live)| live.load(Ordering::SeqCst))
    }

    /// The utterance currently playing, if any.
    pub fn current_utterance(&self) -> Option<&Utterance> {
        self.session
            .as_ref()
            .filter(|(_, live)| live.load(Ordering::SeqCst))
            .map(|(utterance, _)| utterance)
    }

    /// Starts reading `text` aloud, or cancels the active utterance.
    ///
    /// While `Speaking` this is the cancel branch and the text is ignored; a
    /// new utterance is only ever started from `Idle`. Empty or markup-only
    /// text is a no-op. Engine failures degrade silently: they are logged at
    /// debug level and the controller stays `Idle`.
    pub fn toggle(&mut self, text: &str, language: Language) {
        if self.state() == SpeechState::Speaking {
            self.cancel_active();
            return;
        }

        if text.trim().is_empty() {
            return;
        }
        let spoken = text_utils::strip_markup(text);
        if spoken.is_empty() {
            return;
        }

        let utterance = Utterance {
            text: spoken,
            locale: language.locale_tag().to_owned(),
            rate: self.config.rate,
        };

        // Each session carries its own liveness flag; a completion firing
        // after cancel finds the flag already cleared and is ignored.
        let live = Arc::new(AtomicBool::new(true));
        let done_flag = Arc::clone(&live);
        let done_tx = self.event_tx.clone();
        let on_done = Box::new(move || {
            if !done_flag.swap(false, Ordering::SeqCst) {
                return;
            }
            let _ = done_tx.send(SpeechEvent::SpeakingFinished);
            let _ = done_tx.send(SpeechEvent::StateChanged(SpeechState::Idle));
        });

        match self.engine.speak(&utterance, on_done) {
            Ok(()) => {
                tracing::debug!(
                    locale = %utterance.locale,
                    chars = utterance.text.len(),
                    "Utterance started"
                );
                self.emit(SpeechEvent::StateChanged(SpeechState::Speaking));
                self.emit(SpeechEvent::SpeakingStarted {
                    locale: utterance.locale.clone(),
                });
                self.session = Some((utterance, live));
            }
            Err(err) => {
                tracing::debug!(error = %err, "Speech engine unavailable, read-aloud skipped");
            }
        }
    }

    /// Cancels the active utterance, if its completion has not fired yet.
    fn cancel_active(&mut self) {
        let Some((_, live)) = self.session.take() else {
            return;
        };
        if live.swap(false, Ordering::SeqCst) {
            self.engine.cancel();
            tracing::debug!("Utterance cancelled");
            self.emit(SpeechEvent::SpeakingFinished);
            self.emit(SpeechEvent::StateChanged(SpeechState::Idle));
        }
    }

    /// Emit a speech event (best-effort; if the receiver is dropped, log and move on).
    fn emit(&self, event: SpeechEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::warn!("Speech event receiver dropped");
        }
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        self.cancel_active();
    }
}
