//! Console adapter for the render port

use crate::output::ConsoleFormatter;
use crate::progress::LoadingIndicator;
use colored::Colorize;
use motordoc_application::DiagnosticPresenter;
use motordoc_domain::{DiagnosticReport, HealthStatus, Vehicle};

/// Paints session outcomes on the terminal.
pub struct ConsolePresenter {
    indicator: LoadingIndicator,
}

impl ConsolePresenter {
    pub fn new(quiet: bool) -> Self {
        Self {
            indicator: if quiet {
                LoadingIndicator::disabled()
            } else {
                LoadingIndicator::new()
            },
        }
    }
}

impl DiagnosticPresenter for ConsolePresenter {
    fn show_loading(&self) {
        self.indicator.start("Contacting diagnostic assistant...");
    }

    fn hide_loading(&self) {
        self.indicator.stop();
    }

    fn show_vehicle(&self, vehicle: &Vehicle) {
        print!("{}", ConsoleFormatter::format_vehicle(vehicle));
    }

    fn show_identification_failed(&self, detail: &str) {
        println!("{}", "Could not identify vehicle.".red().bold());
        eprintln!("{}", ConsoleFormatter::format_error(detail).trim_end());
    }

    fn show_report(&self, report: &DiagnosticReport) {
        print!("{}", ConsoleFormatter::format_report(report));
    }

    fn show_diagnosis_error(&self, detail: &str) {
        print!("{}", ConsoleFormatter::format_error(detail));
    }

    fn show_health(&self, health: &HealthStatus) {
        print!("{}", ConsoleFormatter::format_health(health));
    }

    fn prompt(&self, message: &str) {
        println!("{}", message.yellow());
    }
}
