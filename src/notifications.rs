mod failure_message;
mod notice;
mod notice_kind;
mod notifier;

pub use self::{
    failure_message::{UNKNOWN_ERROR_MESSAGE, failure_message},
    notice::Notice,
    notice_kind::NoticeKind,
    notifier::{Notifier, SECRET_SAVED_MESSAGE},
};
