//! Base endpoint of the generation backend.
//!
//! On a sandboxed host the backend is reachable on the same origin with the
//! backend port substituted for the frontend port. Everywhere else the
//! configured local-development address is used.

use std::fmt;
use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;
use crate::ports::ExportFormat;

/// Errors resolving the base endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported endpoint scheme '{scheme}'")]
    UnsupportedScheme { scheme: String },
}

/// Resolved base URL, e.g. `http://localhost:8000/api/v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEndpoint(Url);

impl BaseEndpoint {
    /// Parses an absolute http(s) base URL.
    pub fn parse(value: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(value.trim()).map_err(|e| EndpointError::InvalidUrl {
            url: value.to_string(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(EndpointError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    /// Resolves the endpoint once for a client.
    ///
    /// A sandbox origin that cannot be turned into a URL is logged and
    /// replaced by the fallback.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError` only when the fallback itself is invalid.
    pub fn resolve(config: &ClientConfig) -> Result<Self, EndpointError> {
        if let Some(origin) = config.page_origin.as_deref() {
            match Self::from_sandbox_origin(config, origin) {
                Ok(Some(endpoint)) => {
                    tracing::debug!(endpoint = %endpoint, "Resolved sandbox generation endpoint");
                    return Ok(endpoint);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(origin, error = %e, "Falling back to local generation endpoint");
                }
            }
        }
        let endpoint = Self::parse(&config.fallback_base_url)?;
        tracing::debug!(endpoint = %endpoint, "Using fallback generation endpoint");
        Ok(endpoint)
    }

    /// `Ok(None)` when `origin` is not a sandboxed host.
    fn from_sandbox_origin(
        config: &ClientConfig,
        origin: &str,
    ) -> Result<Option<Self>, EndpointError> {
        let page = Self::parse(origin)?;
        let sandboxed = page
            .0
            .host_str()
            .is_some_and(|host| host.contains(config.sandbox_marker.as_str()));
        if !sandboxed {
            return Ok(None);
        }

        let origin = origin.trim().trim_end_matches('/');
        let rewritten = origin.replacen(
            &config.frontend_port.to_string(),
            &config.backend_port.to_string(),
            1,
        );
        Self::parse(&format!("{}{}", rewritten, config.api_prefix)).map(Some)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// `{base}/generate?format={extension}`
    pub fn generate_url(&self, format: ExportFormat) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("generate");
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("format", format.extension());
        url
    }
}

impl fmt::Display for BaseEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
