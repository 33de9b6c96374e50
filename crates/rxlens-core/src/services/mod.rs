//! Client-side controllers: upload session and analysis submission.

mod analysis;
mod upload;

pub use analysis::{AnalysisController, AnalysisState, SubmitError, TRANSPORT_FAILURE_MESSAGE};
pub use upload::{PreviewHandle, UploadSession};
