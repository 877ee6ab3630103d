//! WizardSession - One author's wizard, from seeded draft to export.
//!
//! Owns the draft, the step cursor and the submission state shown around
//! the form: per-action busy flags, the single active error message, the
//! success flag, the selected export format and the live preview.
//!
//! All methods take `&self`. Draft edits are synchronous; download and
//! preview are async and ignored while the same action is already running.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::domain::draft::{DocumentDraft, DraftEdit, EditOutcome};
use crate::domain::foundation::Percentage;
use crate::domain::wizard::{StepCursor, WizardStep};
use crate::ports::{
    DownloadStorage, ExportFormat, GeneratedDocument, PreviewHandle, StorageError,
    SubmissionError,
};

use super::SubmissionClient;

/// Shown when a preview cannot be produced, whatever the cause.
pub const PREVIEW_FAILED_MESSAGE: &str =
    "Impossible de générer la prévisualisation. Vérifiez que LibreOffice est installé sur le serveur.";

/// Errors surfaced by session actions.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Failed to save download: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Message shown to the author.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Submission(err) => err.user_message(),
            SessionError::Storage(_) => {
                "Le document a été généré mais n'a pas pu être enregistré.".to_string()
            }
        }
    }
}

/// Result of a download or preview action.
#[derive(Debug)]
pub enum SubmissionOutcome<T> {
    Completed(T),
    /// The same action was already in flight.
    Ignored,
    Failed(SessionError),
}

impl<T> SubmissionOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmissionOutcome::Completed(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, SubmissionOutcome::Ignored)
    }
}

/// A completed download.
#[derive(Debug, Clone)]
pub struct DownloadReceipt {
    pub document: GeneratedDocument,
    /// Where the document was written, when the session has storage.
    pub saved_to: Option<PathBuf>,
}

/// Clears the flag on drop.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Wizard state for one document.
pub struct WizardSession {
    client: SubmissionClient,
    downloads: Option<Arc<dyn DownloadStorage>>,
    draft: Mutex<DocumentDraft>,
    cursor: Mutex<StepCursor>,
    selected_format: Mutex<ExportFormat>,
    error: Mutex<Option<String>>,
    success: AtomicBool,
    generating: AtomicBool,
    previewing: AtomicBool,
    preview: Mutex<Option<PreviewHandle>>,
}

impl WizardSession {
    /// Opens a wizard on a freshly seeded draft.
    pub fn new(client: SubmissionClient) -> Self {
        Self::with_draft(client, DocumentDraft::new())
    }

    /// Opens a wizard on an existing draft.
    pub fn with_draft(client: SubmissionClient, draft: DocumentDraft) -> Self {
        Self {
            client,
            downloads: None,
            draft: Mutex::new(draft),
            cursor: Mutex::new(StepCursor::new()),
            selected_format: Mutex::new(ExportFormat::default()),
            error: Mutex::new(None),
            success: AtomicBool::new(false),
            generating: AtomicBool::new(false),
            previewing: AtomicBool::new(false),
            preview: Mutex::new(None),
        }
    }

    /// Saves completed downloads to `storage`.
    pub fn with_download_storage(mut self, storage: Arc<dyn DownloadStorage>) -> Self {
        self.downloads = Some(storage);
        self
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Draft
    // ════════════════════════════════════════════════════════════════════════════════

    /// Snapshot of the current draft.
    pub fn draft(&self) -> DocumentDraft {
        lock(&self.draft).clone()
    }

    /// Applies an edit, replacing the draft with the edited snapshot.
    pub fn edit(&self, edit: DraftEdit) -> EditOutcome {
        let mut draft = lock(&self.draft);
        let result = draft.apply(edit);
        if result.outcome.is_applied() {
            *draft = result.draft;
        } else {
            tracing::debug!(outcome = ?result.outcome, "Draft edit ignored");
        }
        result.outcome
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Navigation
    // ════════════════════════════════════════════════════════════════════════════════

    pub fn current_step(&self) -> WizardStep {
        lock(&self.cursor).current()
    }

    pub fn next_step(&self) -> WizardStep {
        lock(&self.cursor).next()
    }

    pub fn previous_step(&self) -> WizardStep {
        lock(&self.cursor).previous()
    }

    pub fn go_to(&self, step: WizardStep) {
        lock(&self.cursor).go_to(step);
    }

    pub fn completion(&self) -> Percentage {
        lock(&self.cursor).completion()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Submission state
    // ════════════════════════════════════════════════════════════════════════════════

    pub fn selected_format(&self) -> ExportFormat {
        *lock(&self.selected_format)
    }

    pub fn select_format(&self, format: ExportFormat) {
        *lock(&self.selected_format) = format;
    }

    /// The single active error message.
    pub fn error_message(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    pub fn is_success(&self) -> bool {
        self.success.load(Ordering::Acquire)
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    pub fn is_previewing(&self) -> bool {
        self.previewing.load(Ordering::Acquire)
    }

    /// URL of the live preview, if any.
    pub fn preview_url(&self) -> Option<String> {
        lock(&self.preview).as_ref().map(|handle| handle.url().to_string())
    }

    fn set_error(&self, message: Option<String>) {
        *lock(&self.error) = message;
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Actions
    // ════════════════════════════════════════════════════════════════════════════════

    /// Downloads the draft in the selected format.
    pub async fn download(&self) -> SubmissionOutcome<DownloadReceipt> {
        let Some(_busy) = BusyGuard::try_acquire(&self.generating) else {
            tracing::debug!("Download already in progress, ignoring request");
            return SubmissionOutcome::Ignored;
        };

        self.set_error(None);
        self.success.store(false, Ordering::Release);

        let draft = self.draft();
        let format = self.selected_format();
        tracing::info!(%format, "Download requested");

        match self.generate_and_save(&draft, format).await {
            Ok(receipt) => {
                self.success.store(true, Ordering::Release);
                SubmissionOutcome::Completed(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Download failed");
                self.set_error(Some(err.user_message()));
                SubmissionOutcome::Failed(err)
            }
        }
    }

    async fn generate_and_save(
        &self,
        draft: &DocumentDraft,
        format: ExportFormat,
    ) -> Result<DownloadReceipt, SessionError> {
        let document = self.client.request_download(draft, format).await?;
        let saved_to = match &self.downloads {
            Some(storage) => Some(storage.store(&document).await?),
            None => None,
        };
        Ok(DownloadReceipt { document, saved_to })
    }

    /// Renders a PDF preview and makes it the live preview.
    ///
    /// The previous preview is released before the request is sent.
    pub async fn preview(&self) -> SubmissionOutcome<String> {
        let Some(_busy) = BusyGuard::try_acquire(&self.previewing) else {
            tracing::debug!("Preview already in progress, ignoring request");
            return SubmissionOutcome::Ignored;
        };

        self.set_error(None);
        self.close_preview();

        let draft = self.draft();
        match self.client.request_preview(&draft).await {
            Ok(handle) => {
                let url = handle.url().to_string();
                if let Some(stale) = lock(&self.preview).replace(handle) {
                    stale.release();
                }
                SubmissionOutcome::Completed(url)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Preview failed");
                self.set_error(Some(PREVIEW_FAILED_MESSAGE.to_string()));
                SubmissionOutcome::Failed(err.into())
            }
        }
    }

    /// Releases the live preview. Returns `false` when none was open.
    pub fn close_preview(&self) -> bool {
        let handle = lock(&self.preview).take();
        match handle {
            Some(handle) => {
                handle.release();
                tracing::debug!(url = handle.url(), "Preview closed");
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardSession")
            .field("step", &self.current_step())
            .field("selected_format", &self.selected_format())
            .field("error", &self.error_message())
            .field("success", &self.is_success())
            .field("generating", &self.is_generating())
            .field("previewing", &self.is_previewing())
            .finish_non_exhaustive()
    }
}
