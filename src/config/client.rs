//! Generation client configuration

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Where the generation backend lives, and how to derive it from the page
/// the wizard is served from.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Origin of the hosting page, e.g. `https://app-5173.sandbox.example.dev`
    pub page_origin: Option<String>,

    /// Host fragment identifying a sandboxed/proxied deployment
    #[serde(default = "default_sandbox_marker")]
    pub sandbox_marker: String,

    /// Port the wizard is served on
    #[serde(default = "default_frontend_port")]
    pub frontend_port: u16,

    /// Port the generation backend listens on
    #[serde(default = "default_backend_port")]
    pub backend_port: u16,

    /// Base URL used outside sandboxed hosts
    #[serde(default = "default_fallback_base_url")]
    pub fallback_base_url: String,

    /// Path appended to a derived sandbox origin
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

impl ClientConfig {
    /// Sets the hosting page origin.
    pub fn with_page_origin(mut self, origin: impl Into<String>) -> Self {
        self.page_origin = Some(origin.into());
        self
    }

    /// Sets the fallback base URL.
    pub fn with_fallback_base_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_base_url = url.into();
        self
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frontend_port == 0 {
            return Err(ValidationError::InvalidPort("frontend_port"));
        }
        if self.backend_port == 0 {
            return Err(ValidationError::InvalidPort("backend_port"));
        }
        if self.frontend_port == self.backend_port {
            return Err(ValidationError::PortsMustDiffer);
        }
        if self.sandbox_marker.trim().is_empty() {
            return Err(ValidationError::MissingRequired("client.sandbox_marker"));
        }
        if !self.api_prefix.starts_with('/') {
            return Err(ValidationError::InvalidApiPrefix);
        }
        if self.fallback_base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("client.fallback_base_url"));
        }
        validate_http_url("client.fallback_base_url", &self.fallback_base_url)?;
        if let Some(origin) = &self.page_origin {
            validate_http_url("client.page_origin", origin)?;
        }
        Ok(())
    }
}

fn validate_http_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value).map_err(|e| ValidationError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ValidationError::InvalidUrl {
            field,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            page_origin: None,
            sandbox_marker: default_sandbox_marker(),
            frontend_port: default_frontend_port(),
            backend_port: default_backend_port(),
            fallback_base_url: default_fallback_base_url(),
            api_prefix: default_api_prefix(),
        }
    }
}

fn default_sandbox_marker() -> String {
    ".sandbox.".to_string()
}

fn default_frontend_port() -> u16 {
    5173
}

fn default_backend_port() -> u16 {
    8000
}

fn default_fallback_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.page_origin, None);
        assert_eq!(config.sandbox_marker, ".sandbox.");
        assert_eq!(config.frontend_port, 5173);
        assert_eq!(config.backend_port, 8000);
        assert_eq!(config.fallback_base_url, "http://localhost:8000/api/v1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_equal_ports() {
        let config = ClientConfig {
            backend_port: 5173,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::PortsMustDiffer));
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let config = ClientConfig {
            frontend_port: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPort("frontend_port"))
        );
    }

    #[test]
    fn test_validation_rejects_non_http_fallback() {
        let config = ClientConfig::default().with_fallback_base_url("ftp://files.local/api");
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidUrl { field: "client.fallback_base_url", .. })
        ));
    }

    #[test]
    fn test_validation_rejects_empty_fallback() {
        let config = ClientConfig::default().with_fallback_base_url("  ");
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("client.fallback_base_url"))
        );
    }

    #[test]
    fn test_validation_rejects_unparsable_origin() {
        let config = ClientConfig::default().with_page_origin("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_relative_api_prefix() {
        let config = ClientConfig {
            api_prefix: "api/v1".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidApiPrefix));
    }
}
