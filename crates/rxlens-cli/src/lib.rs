#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the integration test doubles
#[cfg(test)]
use async_trait as _;

// Used only by the binary entry point; library and binary share one dependency list
use dotenvy as _;
use tracing_subscriber as _;

pub mod app;
pub mod parser;
pub mod picker;
pub mod render;

// Re-export primary types for convenient access
pub use parser::Cli;
