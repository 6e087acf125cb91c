use crate::config::{ApiConfig, HttpConfig, SecretsConfig};
use figment::{Figment, Metadata, Profile, Provider, providers, providers::Format, value};
use serde_derive::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    /// Vela API configuration.
    pub api: ApiConfig,
    /// Configuration for the HTTP functionality.
    pub http: HttpConfig,
    /// Configuration for the secrets views.
    pub secrets: SecretsConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values and
    /// the `VELA_` prefixed environment variables.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(Figment::from(RawConfig::default())
            .merge(providers::Toml::file(path))
            .merge(providers::Env::prefixed("VELA_").split("__"))
            .extract()?)
    }
}

impl Provider for RawConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("Vela console main configuration")
    }

    fn data(&self) -> Result<value::Map<Profile, value::Dict>, figment::Error> {
        providers::Serialized::defaults(Self::default()).data()
    }
}
