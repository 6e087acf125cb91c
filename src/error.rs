mod error_body;
mod error_kind;

use anyhow::anyhow;
use std::fmt::{Debug, Display, Formatter};

pub use self::{error_body::ErrorBody, error_kind::ErrorKind};

/// Vela secrets console native error type.
#[derive(thiserror::Error)]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
    body: Option<ErrorBody>,
}

impl Error {
    /// Creates a Not Found error instance with the given message and the optional failure payload.
    pub fn not_found<M>(message: M, body: Option<ErrorBody>) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::NotFound,
            body,
        }
    }

    /// Creates a Validation error instance with the given message. The message is also exposed
    /// as a structured failure payload so that it can be displayed to the user.
    pub fn validation<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        let body = ErrorBody::Json(serde_json::json!({ "error": message.to_string() }));
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::Validation,
            body: Some(body),
        }
    }

    /// Creates a Validation error instance with the given root cause and failure payload.
    pub fn validation_with_body(root_cause: anyhow::Error, body: ErrorBody) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::Validation,
            body: Some(body),
        }
    }

    /// Creates a Transport error instance with the given root cause.
    pub fn transport(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::Transport,
            body: None,
        }
    }

    /// Creates a Transport error instance for a server failure that returned a payload.
    pub fn transport_with_body(root_cause: anyhow::Error, body: ErrorBody) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::Transport,
            body: Some(body),
        }
    }

    /// Kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Payload of the failed request, if any.
    pub fn body(&self) -> Option<&ErrorBody> {
        self.body.as_ref()
    }
}

/// User facing message: the root cause chain without the debug details like backtraces.
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.root_cause)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Error {
            root_cause,
            kind: ErrorKind::Unknown,
            body: None,
        })
    }
}
