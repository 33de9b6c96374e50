//! CLI entry point - the composition root lives in `app`.

use clap::Parser;

use rxlens_cli::{Cli, app};

/// Debug directives for the `--verbose` flag.
///
/// Scoped to the workspace crates so transport internals stay quiet.
const VERBOSE_DIRECTIVES: &str =
    "warn,rxlens_core=debug,rxlens_api=debug,rxlens_speech=debug,rxlens_cli=debug";

fn init_tracing(verbose: bool) {
    let default_directives = if verbose { VERBOSE_DIRECTIVES } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so RXLENS_API_URL and
    // RXLENS_SPEECH_PROGRAM can come from a .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the --verbose default
    init_tracing(cli.verbose);

    app::run(cli).await
}
