use crate::secrets::{SecretEvent, SecretType};
use serde::{Deserialize, Serialize};

/// Payload used to create or update a secret.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SecretWriteParams {
    pub org: String,
    pub repo: String,
    pub team: Option<String>,
    pub name: String,
    /// Omitted entirely when the stored value shouldn't change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub secret_type: SecretType,
    pub images: Vec<String>,
    pub events: Vec<SecretEvent>,
    pub allow_command: bool,
}
