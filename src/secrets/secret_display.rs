use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Loosely structured secret shape kept for backward display compatibility. It doesn't match
/// any real server response, so every field is optional and `key`, `engine` and `origin` are never
/// interpreted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SecretDisplay {
    pub name: Option<String>,
    pub value: Option<String>,
    pub key: Option<String>,
    pub engine: Option<String>,
    #[serde(rename = "type")]
    pub secret_type: Option<String>,
    pub origin: Option<JsonValue>,
}
