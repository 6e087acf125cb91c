mod api_config;
mod http_config;
mod raw_config;
mod secrets_config;

pub use self::{
    api_config::ApiConfig,
    http_config::{HttpClientConfig, HttpConfig},
    raw_config::RawConfig,
    secrets_config::SecretsConfig,
};

/// Main console config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the console binary.
    pub version: String,
    /// Vela API configuration.
    pub api: ApiConfig,
    /// Configuration for the HTTP functionality.
    pub http: HttpConfig,
    /// Configuration for the secrets views.
    pub secrets: SecretsConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            api: raw_config.api,
            http: raw_config.http,
            secrets: raw_config.secrets,
        }
    }
}
