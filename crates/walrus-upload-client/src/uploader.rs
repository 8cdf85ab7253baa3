//! Upload form controller.
//!
//! Owns the form field state, the result history, the single user-visible
//! error slot, and the in-progress flag that keeps at most one upload in
//! flight. The flow per submission is Idle -> Uploading -> (Success |
//! Failed) -> Idle; terminal states return to Idle immediately.

use tracing::error;

use walrus_upload_core::{EndpointConfig, ExplorerLinks, UploadError, UploadedBlob};

use crate::PublisherClient;

/// Message shown to the user for any failed upload. The underlying failure
/// detail goes to the log, never to the user.
pub const UPLOAD_ERROR_MESSAGE: &str = "Error uploading file. Check the log for details.";

/// A file picked for upload.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Form field state. `epochs >= 1` is enforced at the input surface (the
/// CLI argument parser), not re-validated here.
#[derive(Clone, Debug)]
pub struct UploadForm {
    pub publisher_url: String,
    pub aggregator_url: String,
    pub file: Option<SelectedFile>,
    pub epochs: u64,
}

impl UploadForm {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            publisher_url: config.publisher_url.clone(),
            aggregator_url: config.aggregator_url.clone(),
            file: None,
            epochs: 1,
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The receipt was normalized and prepended to the history.
    Stored,
    /// The upload failed; the error slot holds the user message.
    Failed,
    /// No file was selected; nothing changed.
    Ignored,
    /// A submission was already in flight; nothing changed.
    Busy,
}

/// Upload form controller: form state, result history, error slot.
///
/// The history is most-recent-first and unbounded; it lives as long as the
/// controller. Explorer link bases are fixed at construction time.
pub struct BlobUploader {
    pub form: UploadForm,
    links: ExplorerLinks,
    history: Vec<UploadedBlob>,
    error: Option<String>,
    in_progress: bool,
}

impl BlobUploader {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            form: UploadForm::new(config),
            links: config.explorer_links(),
            history: Vec::new(),
            error: None,
            in_progress: false,
        }
    }

    /// Result history, most recent upload first.
    pub fn history(&self) -> &[UploadedBlob] {
        &self.history
    }

    /// The user-visible error message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.in_progress
    }

    /// Submit the current form.
    ///
    /// A submission with no file selected is silently ignored, and a
    /// submission while another is in flight has no observable effect.
    /// The error slot is overwritten on every real attempt: cleared up
    /// front, set again only if the attempt fails. The in-progress flag is
    /// cleared on every exit path, so the form is always usable for a retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.in_progress {
            return SubmitOutcome::Busy;
        }
        let Some(file) = self.form.file.clone() else {
            return SubmitOutcome::Ignored;
        };

        self.in_progress = true;
        self.error = None;

        let outcome = match self.store_blob(&file).await {
            Ok(record) => {
                self.history.insert(0, record);
                SubmitOutcome::Stored
            }
            Err(err) => {
                error!(error = %err, file = %file.name, "blob upload failed");
                self.error = Some(UPLOAD_ERROR_MESSAGE.to_string());
                SubmitOutcome::Failed
            }
        };

        self.in_progress = false;
        outcome
    }

    async fn store_blob(&self, file: &SelectedFile) -> Result<UploadedBlob, UploadError> {
        let client = PublisherClient::new(&self.form.publisher_url)?;
        let response = client.store(file.bytes.clone(), self.form.epochs).await?;
        Ok(UploadedBlob::from_response(
            response,
            &self.form.aggregator_url,
            &self.links,
            &file.media_type,
        ))
    }
}
