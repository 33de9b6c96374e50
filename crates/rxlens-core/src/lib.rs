#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod view;

// Re-export commonly used types for convenience
pub use domain::{AnalysisOutcome, AnalysisRequest, Language, ParseLanguageError, PrescriptionFile};
pub use ports::{AnalysisClient, AnalysisClientError};
pub use services::{
    AnalysisController, AnalysisState, PreviewHandle, SubmitError, TRANSPORT_FAILURE_MESSAGE,
    UploadSession,
};
pub use view::{ViewState, analyze_label, speak_label};
