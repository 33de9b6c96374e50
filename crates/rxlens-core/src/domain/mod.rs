//! Domain types shared across the rxlens crates.

mod language;
mod prescription;

pub use language::{Language, ParseLanguageError};
pub use prescription::{AnalysisOutcome, AnalysisRequest, PrescriptionFile};
