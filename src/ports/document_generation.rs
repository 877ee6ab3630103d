//! Document Generation Port - Rendering interface of the DAT backend.
//!
//! This port defines the contract for turning a draft into a rendered
//! office document. The application depends on this trait, while adapters
//! (like HttpDocumentGenerator) provide the implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::draft::DocumentDraft;

/// Port for rendering a draft into a binary document.
///
/// # Contract
///
/// Implementations must:
/// - Send the whole draft in its payload shape, with the format selector
/// - Return the response bytes unmodified
/// - Classify failures as validation, server or transport errors
/// - Never retry on their own
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn DocumentGenerator = get_generator();
///
/// let bytes = generator.generate(&draft, ExportFormat::Docx).await?;
/// let document = GeneratedDocument::for_draft(bytes, ExportFormat::Docx, &draft);
/// ```
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Render `draft` in `format`.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` when the backend rejects the payload,
    /// fails, or cannot be reached.
    async fn generate(
        &self,
        draft: &DocumentDraft,
        format: ExportFormat,
    ) -> Result<Vec<u8>, SubmissionError>;
}

/// Output formats of the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Editable word-processing document.
    #[default]
    Docx,
    /// Fixed-layout document, also used for previews.
    Pdf,
    /// Open document format.
    Odt,
}

impl ExportFormat {
    /// All formats offered for download.
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Docx, ExportFormat::Pdf, ExportFormat::Odt];

    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Odt => "application/vnd.oasis.opendocument.text",
        }
    }

    /// Get the file extension for this format. Also the query selector.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Odt => "odt",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = SubmissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "docx" | "word" => Ok(ExportFormat::Docx),
            "pdf" => Ok(ExportFormat::Pdf),
            "odt" => Ok(ExportFormat::Odt),
            _ => Err(SubmissionError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Generated document with content and download metadata.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// The response body, unmodified.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was requested.
    pub format: ExportFormat,
}

impl GeneratedDocument {
    /// Create a new generated document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", sanitize_file_stem(base_filename), format.extension()),
            format,
        }
    }

    /// Create with the `DAT_{title}` download name of `draft`.
    pub fn for_draft(content: Vec<u8>, format: ExportFormat, draft: &DocumentDraft) -> Self {
        Self::new(content, format, &format!("DAT_{}", draft.file_stem()))
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Path separators and NUL would escape the download directory.
fn sanitize_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect()
}

/// Errors that can occur while submitting a draft for generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The backend rejected the payload (HTTP 422).
    #[error("Generation payload rejected: {detail}")]
    Validation { detail: String },

    /// The backend answered with another non-success status.
    #[error("Generation service returned status {status}")]
    Server { status: u16 },

    /// No response was received.
    #[error("Generation service unreachable: {reason}")]
    Transport { reason: String },

    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}

impl SubmissionError {
    /// Create a validation error.
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    /// Create a server error.
    pub fn server(status: u16) -> Self {
        Self::Server { status }
    }

    /// Create a transport error.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Message shown to the author.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { .. } => {
                "Données invalides. Veuillez vérifier les champs obligatoires.".to_string()
            }
            Self::Server { status } => {
                format!("Erreur serveur ({}). Veuillez réessayer.", status)
            }
            Self::Transport { .. } => "Erreur réseau. Vérifiez votre connexion.".to_string(),
            Self::UnsupportedFormat(format) => format!("Format non pris en charge : {}", format),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
