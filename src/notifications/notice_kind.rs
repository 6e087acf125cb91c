use serde::Serialize;

/// Kind of the transient notice.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Title displayed above the notice message.
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        }
    }
}
