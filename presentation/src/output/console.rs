//! Console formatter for vehicles and diagnostic reports

use colored::Colorize;
use motordoc_domain::{DiagnosticReport, HealthStatus, SeverityLevel, Vehicle};

/// Formats diagnostic results for console display.
///
/// A report always renders its four sections in fixed order: severity,
/// potential problems, next steps, estimated cost — followed by any
/// supplementary disclaimers. An error renders only the error block.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an identified vehicle
    pub fn format_vehicle(vehicle: &Vehicle) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Vehicle identified".green().bold()));
        output.push_str(&format!("  {} {}\n", "Make:".cyan().bold(), vehicle.make));
        output.push_str(&format!("  {} {}\n", "Model:".cyan().bold(), vehicle.model));
        output.push_str(&format!("  {} {}\n", "Year:".cyan().bold(), vehicle.year));
        output
    }

    /// Format the complete diagnostic report
    pub fn format_report(report: &DiagnosticReport) -> String {
        let mut output = String::new();

        // Severity, color-flagged by tier
        let level = report.severity.level;
        let label = match level {
            SeverityLevel::Critical => level.as_str().red().bold(),
            SeverityLevel::Caution => level.as_str().yellow().bold(),
            SeverityLevel::Information => level.as_str().cyan().bold(),
        };
        output.push_str(&format!("{} {}\n", label, report.severity.message));

        // Potential problems, name bolded with the description inline
        output.push_str(&format!("\n{}\n", "Potential problems:".cyan().bold()));
        for problem in &report.potential_problems {
            output.push_str(&format!(
                "  * {}: {}\n",
                problem.name.bold(),
                problem.description
            ));
        }

        // Next steps, in order
        output.push_str(&format!("\n{}\n", "Next steps:".cyan().bold()));
        for step in &report.next_steps {
            output.push_str(&format!("  * {}\n", step));
        }

        // Estimated cost with its disclaimer
        output.push_str(&format!(
            "\n{} {}\n  {}\n",
            "Estimated cost:".cyan().bold(),
            report.estimated_cost.range,
            report.estimated_cost.disclaimer.dimmed()
        ));

        if !report.disclaimers.is_empty() {
            output.push('\n');
            for disclaimer in &report.disclaimers {
                output.push_str(&format!("  {}\n", disclaimer.dimmed()));
            }
        }

        output
    }

    /// Format an error block. Renders only the error, nothing else.
    pub fn format_error(detail: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), detail)
    }

    /// Format a health check result
    pub fn format_health(health: &HealthStatus) -> String {
        let status = if health.is_ok() {
            health.status.green().bold()
        } else {
            health.status.red().bold()
        };
        format!("{} {} - {}\n", "API status:".cyan().bold(), status, health.message)
    }
}
