use crate::{
    forms::SubmissionState,
    notifications::{Notice, NoticeKind},
};

/// Message of the notice published once a secret is saved.
pub const SECRET_SAVED_MESSAGE: &str = "Successfully saved your secret";

/// Holds at most one active notice per kind, the latest notice replaces the previous one of the
/// same kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    success: Option<Notice>,
    error: Option<Notice>,
}

impl Notifier {
    /// Publishes the notice that matches the resolved submission state. Unresolved states don't
    /// produce notices.
    pub fn notify(&mut self, state: &SubmissionState) {
        match state {
            SubmissionState::Success(_) => self.publish(Notice::success(SECRET_SAVED_MESSAGE)),
            SubmissionState::Error(message) => self.publish(Notice::error(message.as_str())),
            SubmissionState::Idle | SubmissionState::Pending => {}
        }
    }

    pub fn publish(&mut self, notice: Notice) {
        let kind = notice.kind;
        *self.slot_mut(kind) = Some(notice);
    }

    /// Dismisses the active notice of the specified kind, returns the dismissed notice.
    pub fn dismiss(&mut self, kind: NoticeKind) -> Option<Notice> {
        self.slot_mut(kind).take()
    }

    pub fn active(&self, kind: NoticeKind) -> Option<&Notice> {
        match kind {
            NoticeKind::Success => self.success.as_ref(),
            NoticeKind::Error => self.error.as_ref(),
        }
    }

    /// All active notices.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.success.iter().chain(self.error.iter())
    }

    fn slot_mut(&mut self, kind: NoticeKind) -> &mut Option<Notice> {
        match kind {
            NoticeKind::Success => &mut self.success,
            NoticeKind::Error => &mut self.error,
        }
    }
}
