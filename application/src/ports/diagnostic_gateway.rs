//! Diagnostic gateway port
//!
//! Defines the interface for communicating with the remote diagnostic API.
//! One method per consumed endpoint. Implementations (adapters) live in the
//! infrastructure layer.

use async_trait::async_trait;
use motordoc_domain::{DiagnosticReport, HealthStatus, HistoryTurn, Vehicle};
use thiserror::Error;

/// Errors that can occur while talking to the diagnostic API
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Non-ok HTTP response; `detail` carries the server's explanation
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Network or connection failure before a response arrived
    #[error("Connection error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// The user-facing message for this failure.
    ///
    /// For API errors this is the server-supplied `detail` string; for the
    /// other variants it is the full display form.
    pub fn detail(&self) -> String {
        match self {
            GatewayError::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// An image file selected by the user, held in memory for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, forwarded as the multipart part's filename
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Gateway to the remote diagnostic API
///
/// The API contract is fixed: no retries, no timeout, no cancellation at
/// this layer. Every method issues exactly one request.
#[async_trait]
pub trait DiagnosticGateway: Send + Sync {
    /// Resolve a vehicle from a free-form text description.
    async fn identify_from_text(&self, query: &str) -> Result<Vehicle, GatewayError>;

    /// Resolve a vehicle from a photo (e.g. of its VIN sticker).
    async fn identify_from_image(&self, image: &ImageUpload) -> Result<Vehicle, GatewayError>;

    /// Request a diagnosis for `vehicle` from the conversation so far.
    async fn diagnose_conversation(
        &self,
        vehicle: &Vehicle,
        history: &[HistoryTurn],
    ) -> Result<DiagnosticReport, GatewayError>;

    /// Request a diagnosis for `vehicle` from a photo plus a text prompt.
    async fn diagnose_image(
        &self,
        vehicle: &Vehicle,
        prompt: &str,
        image: &ImageUpload,
    ) -> Result<DiagnosticReport, GatewayError>;

    /// Check whether the API is reachable and healthy.
    async fn health(&self) -> Result<HealthStatus, GatewayError>;
}
