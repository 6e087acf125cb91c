use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Scope a secret applies to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    /// Shared across the repositories of an organization team.
    Shared,
    /// Available to every repository of an organization.
    Org,
    /// Available to a single repository.
    Repo,
}

impl SecretType {
    /// Returns the name of the scope as it's used in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretType::Shared => "shared",
            SecretType::Org => "org",
            SecretType::Repo => "repo",
        }
    }
}

impl Display for SecretType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
