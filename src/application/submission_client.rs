//! SubmissionClient - Sends a draft to the generation backend.
//!
//! Wraps the `DocumentGenerator` port with the download and preview
//! commands. Errors are returned as they were classified by the adapter.

use std::sync::Arc;

use crate::domain::draft::DocumentDraft;
use crate::ports::{
    DocumentGenerator, ExportFormat, GeneratedDocument, PreviewHandle, PreviewRegistry,
    SubmissionError,
};

/// Download and preview commands over the generation port.
///
/// # Dependencies
///
/// - `DocumentGenerator`: Render the draft
/// - `PreviewRegistry`: Expose preview bytes under a local URL
///
/// # Usage
///
/// ```rust,ignore
/// let client = SubmissionClient::new(generator, previews);
/// let document = client.request_download(&draft, ExportFormat::Pdf).await?;
/// std::fs::write(&document.filename, &document.content)?;
/// ```
#[derive(Clone)]
pub struct SubmissionClient {
    generator: Arc<dyn DocumentGenerator>,
    previews: Arc<dyn PreviewRegistry>,
}

impl SubmissionClient {
    pub fn new(generator: Arc<dyn DocumentGenerator>, previews: Arc<dyn PreviewRegistry>) -> Self {
        Self {
            generator,
            previews,
        }
    }

    /// Renders `draft` in `format` and names it for download.
    pub async fn request_download(
        &self,
        draft: &DocumentDraft,
        format: ExportFormat,
    ) -> Result<GeneratedDocument, SubmissionError> {
        let content = self.generator.generate(draft, format).await?;
        let document = GeneratedDocument::for_draft(content, format, draft);
        tracing::debug!(filename = %document.filename, bytes = document.len(), "Download ready");
        Ok(document)
    }

    /// Renders `draft` as PDF and registers it for inline display.
    pub async fn request_preview(
        &self,
        draft: &DocumentDraft,
    ) -> Result<PreviewHandle, SubmissionError> {
        let format = ExportFormat::Pdf;
        let content = self.generator.generate(draft, format).await?;
        let handle = PreviewHandle::acquire(Arc::clone(&self.previews), content, format.content_type());
        tracing::debug!(url = handle.url(), bytes = handle.len(), "Preview acquired");
        Ok(handle)
    }
}

impl std::fmt::Debug for SubmissionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionClient")
            .field("live_previews", &self.previews.live_count())
            .finish_non_exhaustive()
    }
}
