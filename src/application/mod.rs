//! Application layer - Commands and session orchestration.
//!
//! This layer coordinates the draft with the generation, preview and
//! download ports.
//!
//! - `SubmissionClient` - Download and preview commands
//! - `WizardSession` - Draft, navigation and submission state of one wizard

mod submission_client;
mod wizard_session;

pub use submission_client::SubmissionClient;
pub use wizard_session::{
    DownloadReceipt, SessionError, SubmissionOutcome, WizardSession, PREVIEW_FAILED_MESSAGE,
};
