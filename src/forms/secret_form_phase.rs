use crate::{forms::SecretFormFields, secrets::SecretRecord};

/// Lifecycle phase of the secret form.
#[derive(Debug, Clone, PartialEq)]
pub enum SecretFormPhase {
    /// Initial values aren't known yet, no fields are exposed.
    Initializing,
    /// Initial values are loaded, fields can be edited.
    Ready {
        /// Record the form was initialized with.
        record: Box<SecretRecord>,
        fields: Box<SecretFormFields>,
    },
    /// Initial values couldn't be loaded.
    Failed(String),
}

impl SecretFormPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, SecretFormPhase::Ready { .. })
    }
}
