use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;

/// Configuration of the HTTP transport used to reach the Vela API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct HttpConfig {
    pub client: HttpClientConfig,
}

/// Vela API client settings. Requests that create or update secrets are sent exactly once, only
/// reads are retried.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    /// Deadline for the whole request, including reading the response body.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    /// Deadline for establishing a connection to the Vela API.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout: Duration,
    /// Number of retries for secret reads that fail with transient errors, 0 disables retries.
    #[serde(default = "default_read_retries")]
    pub read_retries: u32,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            pool_idle_timeout: default_pool_idle_timeout(),
            read_retries: default_read_retries(),
            verbose: false,
        }
    }
}

const fn default_timeout() -> Duration {
    Duration::from_secs(15)
}

const fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

const fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(5)
}

const fn default_read_retries() -> u32 {
    2
}
