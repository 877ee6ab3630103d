//! HTTP Document Generator - Implementation of DocumentGenerator over reqwest.
//!
//! Posts the draft as JSON to `{base}/generate?format=...` and returns the
//! binary response body.
//!
//! # Configuration
//!
//! ```ignore
//! let endpoint = BaseEndpoint::resolve(&config.client)?;
//! let generator = HttpDocumentGenerator::new(endpoint);
//! ```
//!
//! No timeout and no retry: a request runs until the backend answers or
//! the connection fails.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::config::ClientConfig;
use crate::domain::draft::DocumentDraft;
use crate::ports::{DocumentGenerator, ExportFormat, SubmissionError};

use super::{BaseEndpoint, EndpointError};

/// Generation backend client.
#[derive(Debug, Clone)]
pub struct HttpDocumentGenerator {
    endpoint: BaseEndpoint,
    client: Client,
}

impl HttpDocumentGenerator {
    /// Creates a generator for the given endpoint.
    pub fn new(endpoint: BaseEndpoint) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    /// Creates a generator sharing an existing reqwest client.
    pub fn with_client(endpoint: BaseEndpoint, client: Client) -> Self {
        Self { endpoint, client }
    }

    /// Resolves the endpoint from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, EndpointError> {
        Ok(Self::new(BaseEndpoint::resolve(config)?))
    }

    pub fn endpoint(&self) -> &BaseEndpoint {
        &self.endpoint
    }

    /// Maps a non-success status to the submission error taxonomy.
    async fn handle_response_status(response: Response) -> Result<Response, SubmissionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let detail = Self::validation_detail(&error_body);
            tracing::warn!(status = status.as_u16(), %detail, "Generation payload rejected");
            return Err(SubmissionError::validation(detail));
        }

        tracing::error!(status = status.as_u16(), body = %error_body, "Generation service error");
        Err(SubmissionError::server(status.as_u16()))
    }

    /// Extracts the `detail` member of a validation body, else the raw body.
    fn validation_detail(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").cloned())
            .map(|detail| match detail {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            })
            .unwrap_or_else(|| body.to_string())
    }
}

#[async_trait]
impl DocumentGenerator for HttpDocumentGenerator {
    async fn generate(
        &self,
        draft: &DocumentDraft,
        format: ExportFormat,
    ) -> Result<Vec<u8>, SubmissionError> {
        let url = self.endpoint.generate_url(format);
        tracing::debug!(%url, %format, "Requesting document generation");

        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Generation service unreachable");
                SubmissionError::transport(e.to_string())
            })?;

        let response = Self::handle_response_status(response).await?;

        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Generation response body interrupted");
            SubmissionError::transport(format!("Failed to read response body: {}", e))
        })?;

        tracing::info!(%format, bytes = bytes.len(), "Document generated");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_detail_prefers_detail_member() {
        let body = r#"{"detail": [{"loc": ["body", "vms", 0, "cpu"], "msg": "not an int"}]}"#;
        let detail = HttpDocumentGenerator::validation_detail(body);
        assert!(detail.starts_with('['));
        assert!(detail.contains("not an int"));
    }

    #[test]
    fn validation_detail_unwraps_string_detail() {
        let detail = HttpDocumentGenerator::validation_detail(r#"{"detail": "titre_projet requis"}"#);
        assert_eq!(detail, "titre_projet requis");
    }

    #[test]
    fn validation_detail_falls_back_to_raw_body() {
        assert_eq!(
            HttpDocumentGenerator::validation_detail("Unprocessable"),
            "Unprocessable"
        );
    }

    #[test]
    fn from_config_resolves_endpoint() {
        let generator = HttpDocumentGenerator::from_config(&ClientConfig::default()).unwrap();
        assert_eq!(
            generator.endpoint().to_string(),
            "http://localhost:8000/api/v1"
        );
    }
}
