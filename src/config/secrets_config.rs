use serde_derive::{Deserialize, Serialize};

/// Configuration of the secrets views.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SecretsConfig {
    /// Number of secrets displayed on a single page of the list.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

const fn default_per_page() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use crate::config::SecretsConfig;
    use insta::assert_toml_snapshot;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(SecretsConfig::default(), @"per_page = 10");
    }

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        let config: SecretsConfig = toml::from_str("per_page = 25")?;
        assert_eq!(config, SecretsConfig { per_page: 25 });

        let config: SecretsConfig = toml::from_str("")?;
        assert_eq!(config, SecretsConfig::default());

        Ok(())
    }
}
