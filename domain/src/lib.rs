//! Domain layer for motordoc
//!
//! This crate contains the entities and value objects of the vehicle
//! diagnostic client. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Identification
//!
//! Resolving a vehicle's make/model/year from free-form text or a photo.
//! At most one [`Vehicle`] is "current" in a session at a time; it is the
//! precondition for every diagnosis.
//!
//! ## Diagnosis
//!
//! Producing a [`DiagnosticReport`] (severity, potential problems, next
//! steps, estimated cost) from a problem description for a known vehicle.

pub mod conversation;
pub mod error;
pub mod health;
pub mod report;
pub mod vehicle;

// Re-export commonly used types
pub use conversation::{HistoryTurn, Role};
pub use error::DomainError;
pub use health::HealthStatus;
pub use report::{DiagnosticReport, EstimatedCost, Problem, Severity, SeverityLevel};
pub use vehicle::Vehicle;
