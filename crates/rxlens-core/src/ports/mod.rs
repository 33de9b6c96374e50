//! Boundary contracts implemented by adapter crates.

mod analysis;

#[cfg(test)]
pub use analysis::MockAnalysisClient;
pub use analysis::{AnalysisClient, AnalysisClientError};
