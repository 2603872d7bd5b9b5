//! Diagnostic report value objects - the structured result of a diagnosis.
//!
//! These types mirror the diagnostic API's response body exactly:
//! - [`Severity`] - how urgent the situation is
//! - [`Problem`] - one suspected cause
//! - [`EstimatedCost`] - a rough repair cost range
//! - [`DiagnosticReport`] - the complete report
//!
//! A report is transient: built from a single API response, rendered once,
//! then discarded. It is never persisted and never mutates session state.

use serde::{Deserialize, Serialize};

/// Urgency tier of a diagnosis. The wire strings are fixed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    /// Stop driving; immediate attention needed. The color-flagged tier.
    Critical,
    /// Needs attention soon.
    Caution,
    /// Informational only.
    Information,
}

impl SeverityLevel {
    /// Returns `true` for the tier that renders color-flagged.
    pub fn is_critical(&self) -> bool {
        matches!(self, SeverityLevel::Critical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "CRITICAL",
            SeverityLevel::Caution => "CAUTION",
            SeverityLevel::Information => "INFORMATION",
        }
    }
}

/// Severity assessment: a tier plus a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Severity {
    pub level: SeverityLevel,
    pub message: String,
}

/// One suspected cause of the reported symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Short name, e.g. "Worn brake pads"
    pub name: String,
    /// Plain-language explanation
    pub description: String,
}

/// Rough repair cost estimate with its mandatory disclaimer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedCost {
    /// Free-form range, e.g. "$100-$200"
    pub range: String,
    pub disclaimer: String,
}

/// Complete diagnostic report returned by the diagnosis endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Suspected causes, most likely first
    pub potential_problems: Vec<Problem>,
    pub severity: Severity,
    /// Recommended actions, in order
    pub next_steps: Vec<String>,
    pub estimated_cost: EstimatedCost,
    /// Additional caveats; may be empty
    #[serde(default)]
    pub disclaimers: Vec<String>,
}
