use crate::forms::{FormMode, SecretFormContext};
use serde::Serialize;

/// Represents a context for the secret form used for the structured logging. Never includes the
/// secret value.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SecretLogContext {
    pub org: String,
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mode: FormMode,
}

impl SecretLogContext {
    /// Returns context used for the structured logging.
    pub fn new<O: Into<String>, R: Into<String>>(org: O, repo: R, mode: FormMode) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            name: None,
            mode,
        }
    }

    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl SecretFormContext {
    /// Returns context used for the structured logging.
    pub fn log_context(&self) -> SecretLogContext {
        let context = SecretLogContext::new(&self.org, &self.repo, self.mode);
        match self.secret_name {
            Some(ref name) => context.with_name(name),
            None => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forms::{FormMode, SecretFormContext},
        logging::SecretLogContext,
    };
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(SecretLogContext::new("acme", "widgets", FormMode::Add), @r###"
        {
          "org": "acme",
          "repo": "widgets",
          "mode": "add"
        }
        "###);

        assert_json_snapshot!(SecretLogContext::new("acme", "widgets", FormMode::Edit).with_name("API_KEY"), @r###"
        {
          "org": "acme",
          "repo": "widgets",
          "name": "API_KEY",
          "mode": "edit"
        }
        "###);

        Ok(())
    }

    #[test]
    fn log_context() -> anyhow::Result<()> {
        assert_eq!(
            SecretFormContext::add("acme", "widgets").log_context(),
            SecretLogContext::new("acme", "widgets", FormMode::Add)
        );
        assert_eq!(
            SecretFormContext::view("acme", "widgets", "API_KEY").log_context(),
            SecretLogContext::new("acme", "widgets", FormMode::View).with_name("API_KEY")
        );

        Ok(())
    }
}
