use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use url::Url;

/// Configuration for the Vela API the console talks to.
#[derive(Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the Vela server.
    pub host: Url,
    /// Token sent as a bearer token with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: Url::parse("http://localhost:8080").expect("Cannot parse Vela host parameter."),
            token: None,
        }
    }
}

// Token must never end up in the logs.
impl Debug for ApiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host.as_str())
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
