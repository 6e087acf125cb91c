use crate::secrets::{Secret, SecretDisplay, SecretWriteParams};
use serde::Deserialize;

/// One of the wire representations a secret can arrive in. Variants are tried from the most to
/// the least specific one.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SecretShape {
    /// Authoritative representation returned by the server reads.
    Read(Box<Secret>),
    /// Representation used to create or update secrets.
    Write(SecretWriteParams),
    /// Legacy representation, useful for display only.
    Display(SecretDisplay),
}

impl SecretShape {
    /// Name of the shape for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SecretShape::Read(_) => "read",
            SecretShape::Write(_) => "write",
            SecretShape::Display(_) => "display",
        }
    }
}

impl From<Secret> for SecretShape {
    fn from(secret: Secret) -> Self {
        SecretShape::Read(Box::new(secret))
    }
}
