#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod backend;
pub mod controller;
pub mod error;
pub mod text_utils;

// Re-export key types for convenience
pub use backend::espeak::EspeakEngine;
pub use backend::{CompletionCallback, SpeechEngine, Utterance};
pub use controller::{
    DEFAULT_SPEECH_RATE, SpeechConfig, SpeechController, SpeechEvent, SpeechState,
};
pub use error::SpeechError;
