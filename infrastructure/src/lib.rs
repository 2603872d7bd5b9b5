//! Infrastructure layer for motordoc
//!
//! Adapters for the outside world: the reqwest-backed gateway to the
//! diagnostic API and the figment-backed configuration loader.

pub mod config;
pub mod http;

pub use config::{ConfigLoader, FileConfig};
pub use http::HttpDiagnosticGateway;
