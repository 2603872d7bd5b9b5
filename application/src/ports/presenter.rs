//! Render port for diagnosis sessions
//!
//! Defines how the session controller reports back to the user without
//! knowing how output is painted. Implementations live in the presentation
//! layer (console today; any surface that can show a vehicle, a report, and
//! a loading state would do).

use motordoc_domain::{DiagnosticReport, HealthStatus, Vehicle};

/// Presenter capability set: display-vehicle, display-result, and a scoped
/// loading indicator.
///
/// Methods are synchronous and infallible; painting problems are the
/// presenter's own concern and never propagate back into the session.
pub trait DiagnosticPresenter: Send + Sync {
    /// A request is now in flight.
    fn show_loading(&self);

    /// The in-flight request finished, for better or worse. Called exactly
    /// once per dispatched request, on every exit path.
    fn hide_loading(&self);

    /// Identification succeeded; `vehicle` is now current and diagnosis is
    /// enabled.
    fn show_vehicle(&self, vehicle: &Vehicle);

    /// Identification failed; no vehicle is current and diagnosis is
    /// disabled. `detail` is the server or transport explanation.
    fn show_identification_failed(&self, detail: &str);

    /// A diagnosis completed; render the full report.
    fn show_report(&self, report: &DiagnosticReport);

    /// A diagnosis failed; render only an error block. The current vehicle
    /// is unaffected.
    fn show_diagnosis_error(&self, detail: &str);

    /// Result of a health check.
    fn show_health(&self, health: &HealthStatus);

    /// A required input is missing; nothing was sent.
    fn prompt(&self, message: &str);
}

/// No-op presenter for contexts where output is not wanted.
pub struct NoPresenter;

impl DiagnosticPresenter for NoPresenter {
    fn show_loading(&self) {}
    fn hide_loading(&self) {}
    fn show_vehicle(&self, _vehicle: &Vehicle) {}
    fn show_identification_failed(&self, _detail: &str) {}
    fn show_report(&self, _report: &DiagnosticReport) {}
    fn show_diagnosis_error(&self, _detail: &str) {}
    fn show_health(&self, _health: &HealthStatus) {}
    fn prompt(&self, _message: &str) {}
}
