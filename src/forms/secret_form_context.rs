use crate::{forms::FormMode, secrets::SecretPath};

/// Fixed context the secret form is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretFormContext {
    pub org: String,
    pub repo: String,
    pub mode: FormMode,
    /// Name of the existing secret captured when the form is opened, updates are always keyed
    /// by this name even if the name field is edited.
    pub secret_name: Option<String>,
}

impl SecretFormContext {
    /// Context for a form that creates a new repository secret.
    pub fn add<O: Into<String>, R: Into<String>>(org: O, repo: R) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            mode: FormMode::Add,
            secret_name: None,
        }
    }

    /// Context for a form that updates an existing repository secret.
    pub fn edit<O: Into<String>, R: Into<String>, N: Into<String>>(
        org: O,
        repo: R,
        secret_name: N,
    ) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            mode: FormMode::Edit,
            secret_name: Some(secret_name.into()),
        }
    }

    /// Context for a read-only form of an existing repository secret.
    pub fn view<O: Into<String>, R: Into<String>, N: Into<String>>(
        org: O,
        repo: R,
        secret_name: N,
    ) -> Self {
        Self {
            mode: FormMode::View,
            ..Self::edit(org, repo, secret_name)
        }
    }

    /// Path of the secrets collection the form works with.
    pub fn secret_path(&self) -> SecretPath {
        SecretPath::native_repo(&self.org, &self.repo)
    }

    /// Location of the repository secrets list.
    pub fn secrets_list_location(&self) -> String {
        self.secret_path().list_location()
    }
}
