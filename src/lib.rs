#![deny(warnings)]

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod network;
pub mod notifications;
pub mod pager;
pub mod secrets;
pub mod vela;

#[cfg(test)]
mod tests {
    use crate::{
        api::Api,
        config::{ApiConfig, Config},
        network::Network,
    };
    use reqwest::Client;
    use reqwest_middleware::ClientBuilder;
    use url::Url;

    pub use crate::secrets::tests::*;

    pub fn mock_config() -> anyhow::Result<Config> {
        Ok(Config {
            version: "1.0.0".to_string(),
            api: ApiConfig {
                host: Url::parse("http://localhost:8080")?,
                token: Some("t0k3n".to_string()),
            },
            http: Default::default(),
            secrets: Default::default(),
        })
    }

    /// Network without retries, failures are surfaced immediately.
    pub fn mock_network() -> anyhow::Result<Network> {
        let client = ClientBuilder::new(Client::builder().build()?).build();
        Ok(Network::new(client.clone(), client))
    }

    pub fn mock_api_with_host(host: &str) -> anyhow::Result<Api> {
        let mut config = mock_config()?;
        config.api.host = Url::parse(host)?;

        Ok(Api::new(config, mock_network()?))
    }
}
