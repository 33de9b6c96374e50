#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultAnalysisClient is meant to
// be used through the AnalysisClient port, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultAnalysisClient;

// Configuration
pub use config::{AnalysisServiceConfig, DEFAULT_BASE_URL};

// Errors
pub use error::{ApiError, ApiResult};
