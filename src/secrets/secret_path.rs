use crate::secrets::SecretType;

/// Engine that stores secrets in the Vela database.
pub const NATIVE_SECRETS_ENGINE: &str = "native";

/// Identifies the collection of secrets an operation is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPath {
    pub engine: String,
    pub secret_type: SecretType,
    pub org: String,
    pub repo: String,
}

impl SecretPath {
    /// Path of the native secrets of the specified repository.
    pub fn native_repo<O: Into<String>, R: Into<String>>(org: O, repo: R) -> Self {
        Self {
            engine: NATIVE_SECRETS_ENGINE.to_string(),
            secret_type: SecretType::Repo,
            org: org.into(),
            repo: repo.into(),
        }
    }

    /// Returns URL encoded `{engine}/{type}/{org}/{repo}` path.
    pub fn to_url_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            urlencoding::encode(&self.engine),
            self.secret_type,
            urlencoding::encode(&self.org),
            urlencoding::encode(&self.repo)
        )
    }

    /// Console location of the repository secrets list, `/{org}/{repo}/secrets/{engine}`.
    pub fn list_location(&self) -> String {
        format!(
            "/{}/{}/secrets/{}",
            urlencoding::encode(&self.org),
            urlencoding::encode(&self.repo),
            urlencoding::encode(&self.engine)
        )
    }
}
