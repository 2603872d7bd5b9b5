//! reqwest adapter for the diagnostic API.
//!
//! Implements the [`DiagnosticGateway`] port against the fixed HTTP
//! contract: four POST endpoints plus a health probe. JSON bodies for text
//! operations, multipart forms for image uploads (content negotiation for
//! the image parts is left to reqwest; no explicit content type is set).
//!
//! Error convention: non-ok responses carry a JSON body with a `detail`
//! field, which becomes the user-facing message. No retries, no timeout,
//! no cancellation at this layer.

use async_trait::async_trait;
use motordoc_application::{DiagnosticGateway, GatewayError, ImageUpload};
use motordoc_domain::{DiagnosticReport, HealthStatus, HistoryTurn, Vehicle};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const IDENTIFY_FROM_TEXT: &str = "/vehicle/identify-from-text";
const IDENTIFY_FROM_IMAGE: &str = "/vehicle/identify-from-image";
const DIAGNOSE_CONVERSATION: &str = "/diagnose/conversation";
const DIAGNOSE_IMAGE: &str = "/diagnose/image";
const HEALTH: &str = "/health";

#[derive(Serialize)]
struct IdentifyTextRequest<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct ConversationRequest<'a> {
    vehicle: &'a Vehicle,
    history: &'a [HistoryTurn],
}

/// Body shape of non-ok responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Gateway adapter over a fixed base origin.
pub struct HttpDiagnosticGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDiagnosticGateway {
    /// Creates a gateway for `base_url` (scheme + host + optional port,
    /// with or without a trailing slash).
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn image_part(image: &ImageUpload) -> Part {
        Part::bytes(image.bytes.clone()).file_name(image.file_name.clone())
    }
}

#[async_trait]
impl DiagnosticGateway for HttpDiagnosticGateway {
    async fn identify_from_text(&self, query: &str) -> Result<Vehicle, GatewayError> {
        let url = self.endpoint(IDENTIFY_FROM_TEXT);
        debug!(%url, "POST identify-from-text");
        let response = self
            .client
            .post(&url)
            .json(&IdentifyTextRequest { query })
            .send()
            .await
            .map_err(transport)?;
        read_response(response).await
    }

    async fn identify_from_image(&self, image: &ImageUpload) -> Result<Vehicle, GatewayError> {
        let url = self.endpoint(IDENTIFY_FROM_IMAGE);
        debug!(%url, bytes = image.bytes.len(), "POST identify-from-image");
        let form = Form::new().part("file", Self::image_part(image));
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        read_response(response).await
    }

    async fn diagnose_conversation(
        &self,
        vehicle: &Vehicle,
        history: &[HistoryTurn],
    ) -> Result<DiagnosticReport, GatewayError> {
        let url = self.endpoint(DIAGNOSE_CONVERSATION);
        debug!(%url, %vehicle, turns = history.len(), "POST diagnose/conversation");
        let response = self
            .client
            .post(&url)
            .json(&ConversationRequest { vehicle, history })
            .send()
            .await
            .map_err(transport)?;
        read_response(response).await
    }

    async fn diagnose_image(
        &self,
        vehicle: &Vehicle,
        prompt: &str,
        image: &ImageUpload,
    ) -> Result<DiagnosticReport, GatewayError> {
        let url = self.endpoint(DIAGNOSE_IMAGE);
        debug!(%url, %vehicle, bytes = image.bytes.len(), "POST diagnose/image");
        let form = Form::new()
            .text("make", vehicle.make.clone())
            .text("model", vehicle.model.clone())
            .text("year", vehicle.year.to_string())
            .text("prompt", prompt.to_string())
            .part("file", Self::image_part(image));
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        read_response(response).await
    }

    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        let url = self.endpoint(HEALTH);
        debug!(%url, "GET health");
        let response = self.client.get(&url).send().await.map_err(transport)?;
        read_response(response).await
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Maps a response to the expected body or the API error convention.
async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
        let detail = error_detail(status.as_u16(), &body);
        warn!(status = status.as_u16(), %detail, "API returned an error");
        return Err(GatewayError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_str(&body).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

/// Extracts the `detail` field from an error body, falling back to the
/// status line when the body is not the expected JSON shape.
fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let gateway =
            HttpDiagnosticGateway::new(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(
            gateway.endpoint(IDENTIFY_FROM_TEXT),
            "http://localhost:8000/vehicle/identify-from-text"
        );
    }

    #[test]
    fn test_error_detail_prefers_body_detail() {
        assert_eq!(error_detail(404, r#"{"detail":"no match"}"#), "no match");
    }

    #[test]
    fn test_error_detail_falls_back_to_status() {
        assert_eq!(error_detail(502, "<html>bad gateway</html>"), "HTTP 502");
    }

    #[test]
    fn test_identify_request_wire_shape() {
        let json = serde_json::to_string(&IdentifyTextRequest {
            query: "2015 Honda Civic",
        })
        .unwrap();
        assert_eq!(json, r#"{"query":"2015 Honda Civic"}"#);
    }

    #[test]
    fn test_conversation_request_wire_shape() {
        let vehicle = Vehicle::new("Honda", "Civic", 2015);
        let history = [HistoryTurn::user("engine stalls")];
        let json = serde_json::to_string(&ConversationRequest {
            vehicle: &vehicle,
            history: &history,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"vehicle":{"make":"Honda","model":"Civic","year":2015},"history":[{"role":"user","content":"engine stalls"}]}"#
        );
    }
}
