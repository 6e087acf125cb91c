use crate::notifications::NoticeKind;
use serde::Serialize;

/// Message displayed to the user until it's dismissed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success<M: Into<String>>(message: M) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error<M: Into<String>>(message: M) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn new<M: Into<String>>(kind: NoticeKind, message: M) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: message.into(),
        }
    }
}
