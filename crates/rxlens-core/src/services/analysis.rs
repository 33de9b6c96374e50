//! Submission lifecycle for prescription analysis requests.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::domain::{AnalysisOutcome, AnalysisRequest, Language, PrescriptionFile};
use crate::ports::AnalysisClient;

/// Fixed user-facing text shown for any failed submission, regardless of the
/// underlying transport detail.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "**Error:** Could not connect to the server. Is the Backend running?";

/// Submission lifecycle states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    #[default]
    Idle,
    Submitting,
}

/// A submission was rejected before any request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// No prescription file is selected.
    #[error("Please select a prescription first!")]
    NoFileSelected,
    /// A previous submission has not settled yet.
    #[error("an analysis request is already in flight")]
    AlreadySubmitting,
}

/// Drives the `Idle -> Submitting -> Idle` request lifecycle.
///
/// One controller owns at most one in-flight request. Re-entrant submits are
/// rejected here, in the controller, so the invariant does not depend on any
/// view-layer disablement.
pub struct AnalysisController {
    client: Arc<dyn AnalysisClient>,
    inner: Mutex<ControllerInner>,
}

#[derive(Default)]
struct ControllerInner {
    state: AnalysisState,
    outcome: Option<AnalysisOutcome>,
}

impl AnalysisController {
    pub fn new(client: Arc<dyn AnalysisClient>) -> Self {
        Self {
            client,
            inner: Mutex::new(ControllerInner::default()),
        }
    }

    pub fn state(&self) -> AnalysisState {
        self.inner.lock().unwrap().state
    }

    /// Outcome of the most recently settled submission, if any.
    pub fn outcome(&self) -> Option<AnalysisOutcome> {
        self.inner.lock().unwrap().outcome.clone()
    }

    /// Submits the current selection for analysis and waits for settlement.
    ///
    /// Exactly one request is issued per accepted call; there is no timeout
    /// and no retry. Transport failures are folded into the stored
    /// [`AnalysisOutcome`] rather than returned, so `Err` here always means
    /// the submission was rejected before any request went out.
    pub async fn submit(
        &self,
        file: Option<Arc<PrescriptionFile>>,
        details: &str,
        language: Language,
    ) -> Result<(), SubmitError> {
        let request = {
            // Short critical section; the lock is never held across an await.
            let mut inner = self.inner.lock().unwrap();
            if inner.state == AnalysisState::Submitting {
                return Err(SubmitError::AlreadySubmitting);
            }
            let Some(file) = file else {
                return Err(SubmitError::NoFileSelected);
            };
            inner.state = AnalysisState::Submitting;
            inner.outcome = None;
            AnalysisRequest::new(file, details, language)
        };

        tracing::debug!(
            file = %request.file.file_name,
            language = %request.language,
            "Submitting prescription for analysis"
        );

        // If this future is dropped mid-flight the transport call is torn
        // down with it; the guard then re-arms the controller so a later
        // submit does not find a wedged Submitting state.
        let mut settle = SettleGuard {
            inner: &self.inner,
            armed: true,
        };
        let result = self.client.analyze(request).await;
        settle.armed = false;

        let outcome = match result {
            Ok(report) => AnalysisOutcome::Report(report),
            Err(err) => {
                tracing::warn!(error = %err, "Analysis request failed");
                AnalysisOutcome::Failure(TRANSPORT_FAILURE_MESSAGE.to_owned())
            }
        };

        let mut inner = self.inner.lock().unwrap();
        inner.outcome = Some(outcome);
        inner.state = AnalysisState::Idle;
        Ok(())
    }
}

struct SettleGuard<'a> {
    inner: &'a Mutex<ControllerInner>,
    armed: bool,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut inner) = self.inner.lock() {
            inner.state = AnalysisState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    use super::*;
    use crate::ports::{AnalysisClientError, MockAnalysisClient};

    fn rx_file() -> Arc<PrescriptionFile> {
        Arc::new(PrescriptionFile::new("rx.jpg", "image/jpeg", vec![0xFF, 0xD8]))
    }

    /// Client whose reply is gated on a notification, for in-flight tests.
    #[derive(Clone, Default)]
    struct PendingClient {
        started: Arc<Notify>,
        release: Arc<Notify>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl AnalysisClient for PendingClient {
        async fn analyze(&self, _request: AnalysisRequest) -> Result<String, AnalysisClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            Ok("late report".to_owned())
        }
    }

    #[tokio::test]
    async fn success_stores_the_report_verbatim() {
        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .times(1)
            .returning(|_| Ok("**Report**".to_owned()));
        let controller = AnalysisController::new(Arc::new(client));

        controller
            .submit(Some(rx_file()), "", Language::English)
            .await
            .unwrap();

        assert_eq!(controller.state(), AnalysisState::Idle);
        assert_eq!(
            controller.outcome(),
            Some(AnalysisOutcome::Report("**Report**".to_owned()))
        );
    }

    #[tokio::test]
    async fn request_carries_the_submission_snapshot() {
        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .times(1)
            .withf(|request| {
                request.file.file_name == "rx.jpg"
                    && request.details == "Penicillin"
                    && request.language == Language::Hindi
            })
            .returning(|_| Ok("ok".to_owned()));
        let controller = AnalysisController::new(Arc::new(client));

        controller
            .submit(Some(rx_file()), "Penicillin", Language::Hindi)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn every_transport_failure_collapses_to_the_fixed_message() {
        let failures = [
            AnalysisClientError::Network {
                message: "connection refused".to_owned(),
            },
            AnalysisClientError::Endpoint { status: 500 },
            AnalysisClientError::MalformedResponse {
                message: "missing field `analysis`".to_owned(),
            },
        ];
        for failure in failures {
            let mut client = MockAnalysisClient::new();
            client
                .expect_analyze()
                .times(1)
                .return_once(move |_| Err(failure));
            let controller = AnalysisController::new(Arc::new(client));

            controller
                .submit(Some(rx_file()), "", Language::English)
                .await
                .unwrap();

            assert_eq!(
                controller.outcome(),
                Some(AnalysisOutcome::Failure(TRANSPORT_FAILURE_MESSAGE.to_owned()))
            );
            assert_eq!(controller.state(), AnalysisState::Idle);
        }
    }

    #[tokio::test]
    async fn missing_file_is_rejected_before_any_request() {
        // No expectations: any call on the mock panics the test.
        let client = MockAnalysisClient::new();
        let controller = AnalysisController::new(Arc::new(client));

        let err = controller
            .submit(None, "notes", Language::Hindi)
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::NoFileSelected);
        assert_eq!(err.to_string(), "Please select a prescription first!");
        assert_eq!(controller.state(), AnalysisState::Idle);
    }

    #[tokio::test]
    async fn missing_file_keeps_the_previous_outcome() {
        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .times(1)
            .returning(|_| Ok("kept".to_owned()));
        let controller = AnalysisController::new(Arc::new(client));
        controller
            .submit(Some(rx_file()), "", Language::English)
            .await
            .unwrap();

        let _ = controller
            .submit(None, "", Language::English)
            .await
            .unwrap_err();

        assert_eq!(
            controller.outcome(),
            Some(AnalysisOutcome::Report("kept".to_owned()))
        );
    }

    #[tokio::test]
    async fn resubmitting_while_in_flight_is_rejected_without_a_second_request() {
        let client = PendingClient::default();
        let controller = Arc::new(AnalysisController::new(Arc::new(client.clone())));

        let background = {
            let controller = Arc::clone(&controller);
            tokio::spawn(
                async move { controller.submit(Some(rx_file()), "", Language::English).await },
            )
        };
        client.started.notified().await;
        assert_eq!(controller.state(), AnalysisState::Submitting);

        let second = controller.submit(Some(rx_file()), "", Language::English).await;
        assert_eq!(second.unwrap_err(), SubmitError::AlreadySubmitting);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        client.release.notify_one();
        background.await.unwrap().unwrap();
        assert_eq!(controller.state(), AnalysisState::Idle);
        assert_eq!(
            controller.outcome(),
            Some(AnalysisOutcome::Report("late report".to_owned()))
        );
    }

    #[tokio::test]
    async fn a_new_submission_clears_the_displayed_outcome() {
        let client = PendingClient::default();
        let controller = Arc::new(AnalysisController::new(Arc::new(client.clone())));

        client.release.notify_one();
        controller
            .submit(Some(rx_file()), "", Language::English)
            .await
            .unwrap();
        assert!(controller.outcome().is_some());
        // Drain the start signal left over from the first call.
        client.started.notified().await;

        let background = {
            let controller = Arc::clone(&controller);
            tokio::spawn(
                async move { controller.submit(Some(rx_file()), "", Language::English).await },
            )
        };
        client.started.notified().await;
        assert_eq!(
            controller.outcome(),
            None,
            "stale outcome must not show while submitting"
        );

        client.release.notify_one();
        background.await.unwrap().unwrap();
        assert!(controller.outcome().is_some());
    }

    #[test]
    fn dropping_an_in_flight_submission_re_arms_the_controller() {
        let client = PendingClient::default();
        let controller = AnalysisController::new(Arc::new(client.clone()));

        let mut in_flight =
            tokio_test::task::spawn(controller.submit(Some(rx_file()), "", Language::English));
        tokio_test::assert_pending!(in_flight.poll());
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        drop(in_flight);

        assert_eq!(controller.state(), AnalysisState::Idle);

        // The controller accepts a fresh submission after the teardown.
        let mut retry =
            tokio_test::task::spawn(controller.submit(Some(rx_file()), "", Language::English));
        tokio_test::assert_pending!(retry.poll());
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
        drop(retry);
    }
}
