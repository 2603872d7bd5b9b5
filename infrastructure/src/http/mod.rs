//! HTTP adapter for the diagnostic API

mod gateway;

pub use gateway::HttpDiagnosticGateway;
