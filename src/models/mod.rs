//! Data models for the upload client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Selected file
// =============================================================================

/// The currently chosen document image.
///
/// Replaced wholesale by any subsequent valid selection; cleared on reset.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Display name (original filename)
    pub name: String,
    /// Declared MIME type, e.g. `image/png`
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Size in megabytes for display, matching the "N.NN MB" rendering
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

// Manual Debug so log output never dumps file content.
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size)
            .finish()
    }
}

// =============================================================================
// Contact info
// =============================================================================

/// Contact details attached to a submission.
///
/// Bound directly to the input fields; trimming happens at submit time only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Required; non-emptiness is enforced at submit time after trimming
    pub email: String,
    /// Optional
    pub phone: String,
}

// =============================================================================
// Submission status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Preparing,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Terminal phases keep their message but allow a new submission
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
    }
}

/// Current submission state, owned by the controller.
///
/// `phase` and the `error`/`success` messages persist after a submission
/// settles; `in_progress` and `step_label` are cleared on every exit path so
/// a UI never keeps showing a spinner after the request is over.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionStatus {
    pub phase: SubmissionPhase,
    pub in_progress: bool,
    /// Human-readable label for the current step, empty when not submitting
    pub step_label: String,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            in_progress: false,
            step_label: String::new(),
            error: None,
            success: None,
        }
    }
}

impl SubmissionStatus {
    /// A new submission may start only from Idle or a settled terminal phase
    pub fn can_begin(&self) -> bool {
        !self.in_progress && (self.phase == SubmissionPhase::Idle || self.phase.is_terminal())
    }
}

// =============================================================================
// Submission receipt
// =============================================================================

/// Record of a completed (accepted) submission, for headless fronts.
///
/// The webhook processes asynchronously; this only confirms hand-off.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub attempt_id: Uuid,
    pub filename: String,
    pub filesize: u64,
    pub email: String,
    pub webhook_url: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mb() {
        let file = SelectedFile::new("a.png", "image/png", vec![0u8; 2 * 1024 * 1024]);
        assert!((file.size_mb() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_can_begin() {
        let mut status = SubmissionStatus::default();
        assert!(status.can_begin());

        status.phase = SubmissionPhase::Sending;
        status.in_progress = true;
        assert!(!status.can_begin());

        status.phase = SubmissionPhase::Failed;
        status.in_progress = false;
        assert!(status.can_begin());
    }

    #[test]
    fn test_debug_omits_bytes() {
        let file = SelectedFile::new("a.png", "image/png", vec![0u8; 64]);
        let rendered = format!("{:?}", file);
        assert!(rendered.contains("a.png"));
        assert!(!rendered.contains("[0"));
    }
}
