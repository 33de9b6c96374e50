//! Flow across the public surface: select a file, submit, project the view.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rxlens_core::{
    AnalysisClient, AnalysisClientError, AnalysisController, AnalysisOutcome, AnalysisRequest,
    AnalysisState, Language, PrescriptionFile, TRANSPORT_FAILURE_MESSAGE, UploadSession, ViewState,
};

// ── Test double ──────────────────────────────────────────────────────────

/// Canned analysis client that records what the controller sends it.
struct ScriptedAnalysis {
    reply: Result<String, AnalysisClientError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String, Language)>>,
}

impl ScriptedAnalysis {
    fn replying(report: &str) -> Self {
        Self {
            reply: Ok(report.to_owned()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: Err(AnalysisClientError::Network {
                message: "connection refused".to_owned(),
            }),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ScriptedAnalysis {
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, AnalysisClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((
            request.file.file_name.clone(),
            request.details.clone(),
            request.language,
        ));
        self.reply.clone()
    }
}

// ── Flows ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn report_flows_from_selection_to_view() {
    let client = Arc::new(ScriptedAnalysis::replying("Dosage: 500mg"));
    let controller = AnalysisController::new(Arc::clone(&client) as Arc<dyn AnalysisClient>);
    let mut session = UploadSession::new();

    session.select_file(Some(PrescriptionFile::new(
        "rx.jpg",
        "image/jpeg",
        vec![0xFF, 0xD8, 0xFF],
    )));
    controller
        .submit(session.current_file(), "Allergic to Penicillin", Language::Hindi)
        .await
        .unwrap();

    let outcome = controller.outcome();
    let view = ViewState::compose(
        &session,
        controller.state(),
        outcome.as_ref(),
        false,
        Language::Hindi,
    );

    assert_eq!(view.result, Some(AnalysisOutcome::Report("Dosage: 500mg".to_owned())));
    assert!(view.speak_available);
    assert_eq!(view.speak_label, "Read Aloud");
    assert_eq!(view.analyze_label, "Analyze Prescription");

    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    let recorded = client.last_request.lock().unwrap().clone();
    assert_eq!(
        recorded,
        Some((
            "rx.jpg".to_owned(),
            "Allergic to Penicillin".to_owned(),
            Language::Hindi
        ))
    );
}

#[tokio::test]
async fn unreachable_service_shows_the_fixed_message() {
    let client = Arc::new(ScriptedAnalysis::unreachable());
    let controller = AnalysisController::new(client as Arc<dyn AnalysisClient>);
    let mut session = UploadSession::new();
    session.select_file(Some(PrescriptionFile::new("rx.png", "image/png", vec![1])));

    controller
        .submit(session.current_file(), "", Language::English)
        .await
        .unwrap();

    let outcome = controller.outcome().expect("failure is still an outcome");
    assert!(outcome.is_failure());
    assert_eq!(outcome.text(), TRANSPORT_FAILURE_MESSAGE);
    assert_eq!(controller.state(), AnalysisState::Idle);
}

#[tokio::test]
async fn nothing_selected_never_reaches_the_service() {
    let client = Arc::new(ScriptedAnalysis::replying("unused"));
    let controller = AnalysisController::new(Arc::clone(&client) as Arc<dyn AnalysisClient>);
    let session = UploadSession::new();

    let err = controller
        .submit(session.current_file(), "", Language::English)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Please select a prescription first!");
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}
