//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use rxlens_api::DEFAULT_BASE_URL;
use rxlens_core::Language;

/// Command-line interface definition for the prescription analysis tool.
///
/// One invocation is one submission: pick a file, send it, render the report.
#[derive(Parser)]
#[command(name = "rxlens")]
#[command(about = "Analyze a prescription image and explain it in your language")]
#[command(version)]
pub struct Cli {
    /// Prescription image to analyze (jpg, jpeg, png, webp or gif)
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Known allergies to send along with the prescription
    #[arg(short = 'a', long = "allergies", default_value = "")]
    pub allergies: String,

    /// Report language: English, Hindi, Telugu, Tamil, Kannada, Malayalam,
    /// Marathi or Bengali (case-insensitive)
    #[arg(short = 'l', long = "language", default_value = "English")]
    pub language: Language,

    /// Base URL of the analysis service
    #[arg(long = "api-url", env = "RXLENS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Read the report aloud once it arrives
    #[arg(long = "speak")]
    pub speak: bool,

    /// Speech synthesizer binary used with --speak
    #[arg(
        long = "speech-program",
        env = "RXLENS_SPEECH_PROGRAM",
        default_value = "espeak-ng"
    )]
    pub speech_program: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
