/// Describes the kinds of errors the Vela secrets console distinguishes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested secret doesn't exist.
    NotFound,
    /// The request was rejected because of invalid or conflicting input.
    Validation,
    /// The request couldn't be delivered or the server failed to process it.
    Transport,
    /// Unknown error.
    Unknown,
}
