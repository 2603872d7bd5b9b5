//! Diagnosis session use case.
//!
//! [`DiagnosisSession`] is the controller behind every user-triggered
//! operation: identify a vehicle (text or image), then request diagnoses
//! for it (text or image). It owns the single piece of session state — the
//! currently identified [`Vehicle`] — and reports every outcome through the
//! [`DiagnosticPresenter`] render port.
//!
//! Rules the controller enforces:
//! - Required input is validated before any network call; a missing input
//!   surfaces as a prompt and issues zero requests.
//! - The loading indicator wraps each dispatched request and is released
//!   exactly once on every exit path.
//! - Only the two identification operations mutate the current vehicle:
//!   success overwrites it, failure clears it. Diagnosis outcomes never
//!   touch it.
//! - No outcome escalates past the presenter: failures are rendered, not
//!   returned.

use crate::ports::diagnostic_gateway::{DiagnosticGateway, GatewayError, ImageUpload};
use crate::ports::presenter::DiagnosticPresenter;
use motordoc_domain::{DomainError, HistoryTurn, Vehicle};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// An interactive diagnosis session against the remote API.
///
/// Operations take `&mut self`, so a session never has two requests in
/// flight; the loading indicator cannot collide with itself.
pub struct DiagnosisSession {
    gateway: Arc<dyn DiagnosticGateway>,
    vehicle: Option<Vehicle>,
}

impl DiagnosisSession {
    pub fn new(gateway: Arc<dyn DiagnosticGateway>) -> Self {
        Self {
            gateway,
            vehicle: None,
        }
    }

    /// The currently identified vehicle, if any.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Whether diagnosis operations are currently enabled.
    pub fn has_vehicle(&self) -> bool {
        self.vehicle.is_some()
    }

    /// Identify the vehicle from a free-form text description.
    ///
    /// Empty input prompts and sends nothing. Success stores the vehicle as
    /// current; failure clears any previously held vehicle.
    pub async fn identify_from_text(&mut self, query: &str, presenter: &dyn DiagnosticPresenter) {
        let query = query.trim();
        if query.is_empty() {
            presenter.prompt(&DomainError::EmptyQuery.to_string());
            return;
        }

        debug!(query, "identifying vehicle from text");
        presenter.show_loading();
        let result = self.gateway.identify_from_text(query).await;
        presenter.hide_loading();

        self.finish_identification(result, presenter);
    }

    /// Identify the vehicle from a photo.
    pub async fn identify_from_image(
        &mut self,
        image: &ImageUpload,
        presenter: &dyn DiagnosticPresenter,
    ) {
        if image.is_empty() {
            presenter.prompt(&DomainError::EmptyImage.to_string());
            return;
        }

        debug!(file = %image.file_name, bytes = image.bytes.len(), "identifying vehicle from image");
        presenter.show_loading();
        let result = self.gateway.identify_from_image(image).await;
        presenter.hide_loading();

        self.finish_identification(result, presenter);
    }

    /// Request a diagnosis from a text description of the problem.
    ///
    /// Requires a non-empty description and a current vehicle; otherwise
    /// prompts and sends nothing. The held vehicle survives any outcome.
    pub async fn diagnose_from_text(
        &mut self,
        description: &str,
        presenter: &dyn DiagnosticPresenter,
    ) {
        let description = description.trim();
        if description.is_empty() {
            presenter.prompt(&DomainError::EmptyDescription.to_string());
            return;
        }
        let Some(vehicle) = self.vehicle.clone() else {
            presenter.prompt(&DomainError::NoVehicleIdentified.to_string());
            return;
        };

        debug!(%vehicle, "requesting text diagnosis");
        let history = [HistoryTurn::user(description)];
        presenter.show_loading();
        let result = self.gateway.diagnose_conversation(&vehicle, &history).await;
        presenter.hide_loading();

        match result {
            Ok(report) => presenter.show_report(&report),
            Err(err) => {
                warn!(error = %err, "diagnosis failed");
                presenter.show_diagnosis_error(&err.detail());
            }
        }
    }

    /// Request a diagnosis from a photo plus a text description.
    pub async fn diagnose_from_image(
        &mut self,
        description: &str,
        image: &ImageUpload,
        presenter: &dyn DiagnosticPresenter,
    ) {
        let description = description.trim();
        if description.is_empty() {
            presenter.prompt(&DomainError::EmptyDescription.to_string());
            return;
        }
        if image.is_empty() {
            presenter.prompt(&DomainError::EmptyImage.to_string());
            return;
        }
        let Some(vehicle) = self.vehicle.clone() else {
            presenter.prompt(&DomainError::NoVehicleIdentified.to_string());
            return;
        };

        debug!(%vehicle, file = %image.file_name, "requesting image diagnosis");
        presenter.show_loading();
        let result = self
            .gateway
            .diagnose_image(&vehicle, description, image)
            .await;
        presenter.hide_loading();

        match result {
            Ok(report) => presenter.show_report(&report),
            Err(err) => {
                warn!(error = %err, "image diagnosis failed");
                presenter.show_diagnosis_error(&err.detail());
            }
        }
    }

    /// Check that the API is reachable. Has no preconditions and never
    /// touches session state.
    pub async fn check_health(&mut self, presenter: &dyn DiagnosticPresenter) {
        presenter.show_loading();
        let result = self.gateway.health().await;
        presenter.hide_loading();

        match result {
            Ok(health) => presenter.show_health(&health),
            Err(err) => presenter.show_diagnosis_error(&err.detail()),
        }
    }

    fn finish_identification(
        &mut self,
        result: Result<Vehicle, GatewayError>,
        presenter: &dyn DiagnosticPresenter,
    ) {
        match result {
            Ok(vehicle) => {
                info!(%vehicle, "vehicle identified");
                presenter.show_vehicle(&vehicle);
                self.vehicle = Some(vehicle);
            }
            Err(err) => {
                warn!(error = %err, "identification failed");
                self.vehicle = None;
                presenter.show_identification_failed(&err.detail());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motordoc_domain::{
        DiagnosticReport, EstimatedCost, HealthStatus, Problem, Role, Severity, SeverityLevel,
    };
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        IdentifyText(String),
        IdentifyImage(String),
        DiagnoseConversation {
            vehicle: Vehicle,
            history: Vec<HistoryTurn>,
        },
        DiagnoseImage {
            vehicle: Vehicle,
            prompt: String,
            file_name: String,
        },
        Health,
    }

    /// Scripted gateway: queued results per endpoint family, every call
    /// recorded. Unscripted calls fail as transport errors.
    #[derive(Default)]
    struct FakeGateway {
        calls: Mutex<Vec<Call>>,
        vehicles: Mutex<VecDeque<Result<Vehicle, GatewayError>>>,
        reports: Mutex<VecDeque<Result<DiagnosticReport, GatewayError>>>,
    }

    impl FakeGateway {
        fn script_vehicle(&self, result: Result<Vehicle, GatewayError>) {
            self.vehicles.lock().unwrap().push_back(result);
        }

        fn script_report(&self, result: Result<DiagnosticReport, GatewayError>) {
            self.reports.lock().unwrap().push_back(result);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn next_vehicle(&self) -> Result<Vehicle, GatewayError> {
            self.vehicles
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("unscripted".to_string())))
        }

        fn next_report(&self) -> Result<DiagnosticReport, GatewayError> {
            self.reports
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("unscripted".to_string())))
        }
    }

    #[async_trait::async_trait]
    impl DiagnosticGateway for FakeGateway {
        async fn identify_from_text(&self, query: &str) -> Result<Vehicle, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::IdentifyText(query.to_string()));
            self.next_vehicle()
        }

        async fn identify_from_image(&self, image: &ImageUpload) -> Result<Vehicle, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::IdentifyImage(image.file_name.clone()));
            self.next_vehicle()
        }

        async fn diagnose_conversation(
            &self,
            vehicle: &Vehicle,
            history: &[HistoryTurn],
        ) -> Result<DiagnosticReport, GatewayError> {
            self.calls.lock().unwrap().push(Call::DiagnoseConversation {
                vehicle: vehicle.clone(),
                history: history.to_vec(),
            });
            self.next_report()
        }

        async fn diagnose_image(
            &self,
            vehicle: &Vehicle,
            prompt: &str,
            image: &ImageUpload,
        ) -> Result<DiagnosticReport, GatewayError> {
            self.calls.lock().unwrap().push(Call::DiagnoseImage {
                vehicle: vehicle.clone(),
                prompt: prompt.to_string(),
                file_name: image.file_name.clone(),
            });
            self.next_report()
        }

        async fn health(&self) -> Result<HealthStatus, GatewayError> {
            self.calls.lock().unwrap().push(Call::Health);
            Ok(HealthStatus {
                status: "ok".to_string(),
                message: "API is running!".to_string(),
            })
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Shown {
        Loading(bool),
        Vehicle(Vehicle),
        IdentificationFailed(String),
        Report(DiagnosticReport),
        DiagnosisError(String),
        Health(String),
        Prompt(String),
    }

    #[derive(Default)]
    struct RecordingPresenter {
        shown: Mutex<Vec<Shown>>,
    }

    impl RecordingPresenter {
        fn shown(&self) -> Vec<Shown> {
            self.shown.lock().unwrap().clone()
        }

        fn loading_events(&self) -> Vec<bool> {
            self.shown()
                .into_iter()
                .filter_map(|s| match s {
                    Shown::Loading(on) => Some(on),
                    _ => None,
                })
                .collect()
        }
    }

    impl DiagnosticPresenter for RecordingPresenter {
        fn show_loading(&self) {
            self.shown.lock().unwrap().push(Shown::Loading(true));
        }
        fn hide_loading(&self) {
            self.shown.lock().unwrap().push(Shown::Loading(false));
        }
        fn show_vehicle(&self, vehicle: &Vehicle) {
            self.shown
                .lock()
                .unwrap()
                .push(Shown::Vehicle(vehicle.clone()));
        }
        fn show_identification_failed(&self, detail: &str) {
            self.shown
                .lock()
                .unwrap()
                .push(Shown::IdentificationFailed(detail.to_string()));
        }
        fn show_report(&self, report: &DiagnosticReport) {
            self.shown
                .lock()
                .unwrap()
                .push(Shown::Report(report.clone()));
        }
        fn show_diagnosis_error(&self, detail: &str) {
            self.shown
                .lock()
                .unwrap()
                .push(Shown::DiagnosisError(detail.to_string()));
        }
        fn show_health(&self, health: &HealthStatus) {
            self.shown
                .lock()
                .unwrap()
                .push(Shown::Health(health.status.clone()));
        }
        fn prompt(&self, message: &str) {
            self.shown
                .lock()
                .unwrap()
                .push(Shown::Prompt(message.to_string()));
        }
    }

    fn civic() -> Vehicle {
        Vehicle::new("Honda", "Civic", 2015)
    }

    fn sample_report() -> DiagnosticReport {
        DiagnosticReport {
            potential_problems: vec![Problem {
                name: "X".to_string(),
                description: "d".to_string(),
            }],
            severity: Severity {
                level: SeverityLevel::Critical,
                message: "m".to_string(),
            },
            next_steps: vec!["s1".to_string()],
            estimated_cost: EstimatedCost {
                range: "$100-$200".to_string(),
                disclaimer: "est.".to_string(),
            },
            disclaimers: vec![],
        }
    }

    fn session_with(gateway: &Arc<FakeGateway>) -> DiagnosisSession {
        DiagnosisSession::new(gateway.clone())
    }

    #[tokio::test]
    async fn test_identify_from_text_issues_one_request_and_stores_vehicle() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.script_vehicle(Ok(civic()));
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session
            .identify_from_text("2015 Honda Civic", &presenter)
            .await;

        assert_eq!(
            gateway.calls(),
            vec![Call::IdentifyText("2015 Honda Civic".to_string())]
        );
        assert!(session.has_vehicle());
        assert_eq!(session.vehicle(), Some(&civic()));
        assert!(presenter.shown().contains(&Shown::Vehicle(civic())));
    }

    #[tokio::test]
    async fn test_empty_query_prompts_without_any_request() {
        let gateway = Arc::new(FakeGateway::default());
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session.identify_from_text("   ", &presenter).await;

        assert!(gateway.calls().is_empty());
        assert!(presenter.loading_events().is_empty());
        assert!(matches!(presenter.shown().as_slice(), [Shown::Prompt(_)]));
        assert!(!session.has_vehicle());
    }

    #[tokio::test]
    async fn test_failed_identification_clears_previous_vehicle() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.script_vehicle(Ok(civic()));
        gateway.script_vehicle(Err(GatewayError::Api {
            status: 404,
            detail: "no match".to_string(),
        }));
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session
            .identify_from_text("2015 Honda Civic", &presenter)
            .await;
        assert!(session.has_vehicle());

        session.identify_from_text("mystery car", &presenter).await;

        assert!(!session.has_vehicle());
        assert!(
            presenter
                .shown()
                .contains(&Shown::IdentificationFailed("no match".to_string()))
        );
    }

    #[tokio::test]
    async fn test_diagnosis_without_vehicle_never_reaches_gateway() {
        let gateway = Arc::new(FakeGateway::default());
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session.diagnose_from_text("engine stalls", &presenter).await;
        session
            .diagnose_from_image(
                "engine stalls",
                &ImageUpload::new("engine.jpg", vec![1, 2, 3]),
                &presenter,
            )
            .await;

        assert!(gateway.calls().is_empty());
        assert_eq!(
            presenter
                .shown()
                .iter()
                .filter(|s| matches!(s, Shown::Prompt(_)))
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_diagnose_from_text_sends_vehicle_and_single_user_turn() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.script_vehicle(Ok(civic()));
        gateway.script_report(Ok(sample_report()));
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session
            .identify_from_text("2015 Honda Civic", &presenter)
            .await;
        session.diagnose_from_text("engine stalls", &presenter).await;

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            Call::DiagnoseConversation { vehicle, history } => {
                assert_eq!(vehicle, &civic());
                assert_eq!(history.len(), 1);
                assert_eq!(history[0].role, Role::User);
                assert_eq!(history[0].content, "engine stalls");
            }
            other => panic!("unexpected call: {other:?}"),
        }
        assert!(presenter.shown().contains(&Shown::Report(sample_report())));
    }

    #[tokio::test]
    async fn test_diagnosis_failure_leaves_vehicle_intact() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.script_vehicle(Ok(civic()));
        gateway.script_report(Err(GatewayError::Api {
            status: 500,
            detail: "assistant unavailable".to_string(),
        }));
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session
            .identify_from_text("2015 Honda Civic", &presenter)
            .await;
        session.diagnose_from_text("engine stalls", &presenter).await;

        assert!(session.has_vehicle());
        assert!(
            presenter
                .shown()
                .contains(&Shown::DiagnosisError("assistant unavailable".to_string()))
        );
    }

    #[tokio::test]
    async fn test_loading_released_exactly_once_even_on_failure() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.script_vehicle(Err(GatewayError::Transport(
            "connection refused".to_string(),
        )));
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session.identify_from_text("anything", &presenter).await;

        assert_eq!(presenter.loading_events(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_loading_wraps_each_dispatched_request() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.script_vehicle(Ok(civic()));
        gateway.script_report(Ok(sample_report()));
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session.identify_from_text("2015 Honda Civic", &presenter).await;
        session.diagnose_from_text("engine stalls", &presenter).await;

        assert_eq!(presenter.loading_events(), vec![true, false, true, false]);
    }

    #[tokio::test]
    async fn test_identify_from_image_rejects_empty_file() {
        let gateway = Arc::new(FakeGateway::default());
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session
            .identify_from_image(&ImageUpload::new("empty.jpg", vec![]), &presenter)
            .await;

        assert!(gateway.calls().is_empty());
        assert!(matches!(presenter.shown().as_slice(), [Shown::Prompt(_)]));
    }

    #[tokio::test]
    async fn test_diagnose_from_image_sends_prompt_and_file() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.script_vehicle(Ok(civic()));
        gateway.script_report(Ok(sample_report()));
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session
            .identify_from_text("2015 Honda Civic", &presenter)
            .await;
        session
            .diagnose_from_image(
                "what is this stain",
                &ImageUpload::new("leak.jpg", vec![0xff, 0xd8]),
                &presenter,
            )
            .await;

        assert_eq!(
            gateway.calls()[1],
            Call::DiagnoseImage {
                vehicle: civic(),
                prompt: "what is this stain".to_string(),
                file_name: "leak.jpg".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_health_check_renders_status() {
        let gateway = Arc::new(FakeGateway::default());
        let presenter = RecordingPresenter::default();
        let mut session = session_with(&gateway);

        session.check_health(&presenter).await;

        assert_eq!(gateway.calls(), vec![Call::Health]);
        assert!(presenter.shown().contains(&Shown::Health("ok".to_string())));
        assert_eq!(presenter.loading_events(), vec![true, false]);
    }
}
