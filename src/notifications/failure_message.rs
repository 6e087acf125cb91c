use crate::error::Error as VelaError;

/// Message displayed when the failure payload doesn't carry a readable error.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// Derives a human-readable message from the failure payload attached to the error.
pub fn failure_message(err: &anyhow::Error) -> String {
    err.downcast_ref::<VelaError>()
        .and_then(VelaError::body)
        .and_then(|body| body.error_message())
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}
