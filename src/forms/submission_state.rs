use crate::secrets::Secret;

/// State of the latest submission attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing has been submitted yet.
    #[default]
    Idle,
    /// Submission is dispatched and not resolved yet.
    Pending,
    /// Secret is saved, holds the secret returned by the server.
    Success(Box<Secret>),
    /// Submission failed with a message to display.
    Error(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }
}
