//! Composition root: wires the controllers to the HTTP client and the
//! speech engine for one submission.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncBufReadExt;
use tracing::debug;

use rxlens_api::{AnalysisServiceConfig, DefaultAnalysisClient};
use rxlens_core::{
    AnalysisController, AnalysisState, Language, UploadSession, ViewState, analyze_label,
    speak_label,
};
use rxlens_speech::{EspeakEngine, SpeechConfig, SpeechController, SpeechEvent};

use crate::parser::Cli;
use crate::{picker, render};

/// Runs one submission end to end: select, submit, render, optionally speak.
pub async fn run(cli: Cli) -> Result<()> {
    let skin = render::report_skin();
    render::print_banner(&skin);

    let config = AnalysisServiceConfig::new().with_base_url(&cli.api_url);
    let client = Arc::new(DefaultAnalysisClient::new(&config));
    let controller = AnalysisController::new(client);

    let mut session = UploadSession::new();
    if let Some(path) = cli.file.as_deref() {
        session.select_file(Some(picker::load_prescription(path)?));
        if let Some(preview) = session.preview() {
            render::print_preview(preview);
            println!();
        }
    }

    let spinner = analysis_spinner(analyze_label(AnalysisState::Submitting, cli.language));
    let submitted = controller
        .submit(session.current_file(), &cli.allergies, cli.language)
        .await;
    spinner.finish_and_clear();
    submitted?;

    let view = ViewState::compose(
        &session,
        controller.state(),
        controller.outcome().as_ref(),
        false,
        cli.language,
    );
    if let Some(name) = view.file_name.as_deref() {
        debug!(file = name, language = %cli.language, "Submission settled");
    }
    let outcome = view.result.context("analysis settled without an outcome")?;
    render::print_outcome(&skin, &outcome);

    if cli.speak {
        speak_outcome(outcome.text(), cli.language, &cli.speech_program).await;
    }

    Ok(())
}

/// Reads the report aloud until it finishes or the user presses Enter.
async fn speak_outcome(text: &str, language: Language, program: &str) {
    let engine = EspeakEngine::new(program);
    let (mut speech, mut events) =
        SpeechController::new(Box::new(engine), SpeechConfig::default());

    speech.toggle(text, language);
    if !speech.is_speaking() {
        // Missing synthesizer or markup-only text; both degrade to silence.
        return;
    }
    println!("{} (press Enter)", speak_label(true));

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(SpeechEvent::SpeakingFinished) | None => break,
                Some(_) => {}
            },
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(_)) => {
                    if speech.is_speaking() {
                        speech.toggle(text, language);
                    }
                }
                Ok(None) | Err(_) => stdin_open = false,
            },
        }
    }
}

/// Spinner shown while the request is in flight, in the busy-label wording.
fn analysis_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
