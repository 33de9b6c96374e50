//! Speech engine backed by an `espeak-ng` child process.

use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::backend::{CompletionCallback, SpeechEngine, Utterance};
use crate::error::SpeechError;

/// espeak-ng's default speaking rate, in words per minute.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// How often the completion watcher polls the child process.
const COMPLETION_POLL_INTERVAL: Duration = Duration::from_millis(40);

/// Spawns one synthesizer process per utterance and kills it on cancel.
///
/// The active child sits in a shared slot. A watcher thread polls the slot
/// until the process exits; cancellation empties the slot, which the watcher
/// observes as "no longer mine" and exits without firing the callback.
pub struct EspeakEngine {
    program: String,
    child: Arc<Mutex<Option<Child>>>,
}

impl EspeakEngine {
    /// `program` is the synthesizer binary, typically `espeak-ng`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            child: Arc::new(Mutex::new(None)),
        }
    }
}

/// Maps a locale tag onto an espeak voice by primary subtag (`hi-IN` → `hi`).
fn voice_for_locale(locale: &str) -> String {
    locale
        .split('-')
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn words_per_minute(rate: f32) -> u32 {
    (BASE_WORDS_PER_MINUTE * rate).round() as u32
}

impl SpeechEngine for EspeakEngine {
    fn speak(&self, utterance: &Utterance, on_done: CompletionCallback) -> Result<(), SpeechError> {
        // Only one child may exist; replace any survivor first.
        self.cancel();

        let voice = voice_for_locale(&utterance.locale);
        let child = Command::new(&self.program)
            .arg("-v")
            .arg(&voice)
            .arg("-s")
            .arg(words_per_minute(utterance.rate).to_string())
            .arg("--")
            .arg(&utterance.text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::EngineStart {
                program: self.program.clone(),
                source,
            })?;
        let pid = child.id();
        tracing::debug!(pid, %voice, "Speech process started");

        if let Ok(mut slot) = self.child.lock() {
            *slot = Some(child);
        }

        let slot = Arc::clone(&self.child);
        std::thread::spawn(move || {
            loop {
                {
                    let Ok(mut guard) = slot.lock() else { return };
                    match guard.as_mut() {
                        // Cancelled or replaced: this utterance no longer owns the slot.
                        None => return,
                        Some(child) if child.id() != pid => return,
                        Some(child) => match child.try_wait() {
                            Ok(None) => {}
                            Ok(Some(_)) | Err(_) => {
                                guard.take();
                                break;
                            }
                        },
                    }
                }
                std::thread::sleep(COMPLETION_POLL_INTERVAL);
            }
            on_done();
        });

        Ok(())
    }

    fn cancel(&self) {
        if let Ok(mut slot) = self.child.lock() {
            if let Some(mut child) = slot.take() {
                tracing::debug!(pid = child.id(), "Killing speech process");
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}
