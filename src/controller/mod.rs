//! Upload form controller
//!
//! Owns all form state and drives the submission state machine. The
//! controller is headless: a CLI, TUI or GUI front renders `status()` and
//! calls the entry points below in response to its own events.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{
    ContactInfo, SelectedFile, SubmissionPhase, SubmissionReceipt, SubmissionStatus,
};
use crate::validation::{validate_candidate, ValidationError};
use crate::webhook::{DocumentPayload, WebhookClient, WebhookError};

const STEP_PREPARING: &str = "Preparing document...";
const STEP_SENDING: &str = "Sending to processing service...";
const STEP_COMPLETE: &str = "Processing complete!";
const SUCCESS_MESSAGE: &str = "Document processed successfully! Check your email for results.";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please select a file first")]
    NoFileSelected,

    #[error("Please enter your email address")]
    EmailRequired,

    #[error("A submission is already in progress")]
    AlreadyInFlight,

    #[error("Failed to process document: {0}")]
    Webhook(#[from] WebhookError),
}

/// The upload form controller.
///
/// Generic over the webhook seam so the state machine is testable without a
/// network. All methods take `&mut self`: there is exactly one logical
/// writer and at most one submission in flight.
pub struct UploadController<C> {
    client: C,
    webhook_url: String,
    max_upload_size: u64,
    selected: Option<SelectedFile>,
    contact: ContactInfo,
    status: SubmissionStatus,
    drag_active: bool,
}

impl<C: WebhookClient> UploadController<C> {
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            client,
            webhook_url: config.webhook_url().to_string(),
            max_upload_size: config.max_upload_size,
            selected: None,
            contact: ContactInfo::default(),
            status: SubmissionStatus::default(),
            drag_active: false,
        }
    }

    // =========================================================================
    // File acquisition
    // =========================================================================

    /// Accept a candidate file from the native picker.
    pub fn select_from_picker(&mut self, file: SelectedFile) -> Result<(), ValidationError> {
        self.accept_candidate(file)
    }

    /// Accept candidate files from a drop.
    ///
    /// Only the first entry is considered; additional dropped files are
    /// silently ignored. An empty drop changes nothing.
    pub fn select_from_drop(&mut self, files: Vec<SelectedFile>) -> Result<(), ValidationError> {
        self.drag_active = false;
        match files.into_iter().next() {
            Some(first) => self.accept_candidate(first),
            None => Ok(()),
        }
    }

    fn accept_candidate(&mut self, file: SelectedFile) -> Result<(), ValidationError> {
        if let Err(err) = validate_candidate(&file.mime_type, file.size, self.max_upload_size) {
            tracing::warn!(file = %file.name, mime = %file.mime_type, size = file.size, error = %err, "rejected candidate file");
            // The previous selection, if any, stays in place
            self.status.error = Some(err.to_string());
            return Err(err);
        }

        self.status.error = None;
        self.status.success = None;
        tracing::info!(file = %file.name, mime = %file.mime_type, size = file.size, "file selected");
        self.selected = Some(file);
        Ok(())
    }

    // Drag state is purely visual and always permitted.

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    // =========================================================================
    // Contact capture
    // =========================================================================

    /// Bind the email field. No trimming or format checks here; trimming
    /// happens at submit time.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.contact.email = email.into();
    }

    /// Bind the optional phone field.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.contact.phone = phone.into();
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Submit the selected file and contact info to the webhook.
    ///
    /// Single-flight: preconditions are checked synchronously before any
    /// network activity, and the in-progress flag plus step label are
    /// guaranteed cleared on every exit path.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, SubmitError> {
        if !self.status.can_begin() {
            return Err(SubmitError::AlreadyInFlight);
        }

        let Some(file) = self.selected.as_ref() else {
            let err = SubmitError::NoFileSelected;
            self.status.error = Some(err.to_string());
            return Err(err);
        };

        if self.contact.email.trim().is_empty() {
            let err = SubmitError::EmailRequired;
            self.status.error = Some(err.to_string());
            return Err(err);
        }

        let attempt_id = Uuid::new_v4();
        tracing::info!(
            %attempt_id,
            file = %file.name,
            size = file.size,
            endpoint = %self.webhook_url,
            "starting submission"
        );

        let mut flight = Flight::begin(&mut self.status);

        flight.step(SubmissionPhase::Preparing, STEP_PREPARING);
        let payload = DocumentPayload::assemble(file, &self.contact);
        let filename = payload.filename.clone();
        let filesize = payload.filesize;
        let email = payload.email.clone();

        flight.step(SubmissionPhase::Sending, STEP_SENDING);
        match self.client.deliver(payload).await {
            Ok(body) => {
                tracing::debug!(%attempt_id, body_len = body.len(), "webhook response received");
                flight.step(SubmissionPhase::Succeeded, STEP_COMPLETE);
                flight.succeed(SUCCESS_MESSAGE);
                Ok(SubmissionReceipt {
                    attempt_id,
                    filename,
                    filesize,
                    email,
                    webhook_url: self.webhook_url.clone(),
                    submitted_at: Utc::now(),
                })
            }
            Err(cause) => {
                // Diagnostic record for developers; the user sees the
                // message on the status object.
                tracing::error!(%attempt_id, error = %cause, "submission failed");
                let err = SubmitError::Webhook(cause);
                flight.fail(err.to_string());
                Err(err)
            }
        }
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Return everything to its initial state so the same file could be
    /// picked again.
    pub fn reset(&mut self) {
        self.selected = None;
        self.contact = ContactInfo::default();
        self.status = SubmissionStatus::default();
        self.drag_active = false;
        tracing::debug!("controller reset");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Whether the submit control should be enabled: a file is selected,
    /// the email is non-empty, and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.contact.email.trim().is_empty() && self.status.can_begin()
    }
}

/// Scoped flight guard for one submission attempt.
///
/// Clears the in-progress flag and step label when dropped, so the UI never
/// keeps a spinner after the request settles, on any exit path. The terminal
/// phase and its error/success message persist.
struct Flight<'a> {
    status: &'a mut SubmissionStatus,
}

impl<'a> Flight<'a> {
    fn begin(status: &'a mut SubmissionStatus) -> Self {
        status.in_progress = true;
        status.error = None;
        status.success = None;
        Self { status }
    }

    fn step(&mut self, phase: SubmissionPhase, label: &str) {
        tracing::debug!(?phase, label, "submission step");
        self.status.phase = phase;
        self.status.step_label = label.to_string();
    }

    fn succeed(&mut self, message: &str) {
        self.status.phase = SubmissionPhase::Succeeded;
        self.status.success = Some(message.to_string());
    }

    fn fail(&mut self, message: String) {
        self.status.phase = SubmissionPhase::Failed;
        self.status.error = Some(message);
    }
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.status.in_progress = false;
        self.status.step_label.clear();
    }
}
