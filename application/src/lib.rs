//! Application layer for motordoc
//!
//! Defines the ports (interfaces) to the outside world and the
//! [`DiagnosisSession`] use case that orchestrates them. Adapters live in
//! the infrastructure and presentation layers; this crate depends only on
//! the domain.

pub mod ports;
pub mod use_cases;

// Re-export the public surface
pub use ports::diagnostic_gateway::{DiagnosticGateway, GatewayError, ImageUpload};
pub use ports::presenter::{DiagnosticPresenter, NoPresenter};
pub use use_cases::diagnosis_session::DiagnosisSession;
