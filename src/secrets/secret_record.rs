use crate::{
    forms::{FormMode, SecretFormContext},
    secrets::{Secret, SecretAudit, SecretEvent, SecretShape, SecretType},
};
use anyhow::bail;
use serde::Serialize;
use std::collections::BTreeSet;

/// Canonical in-memory representation of a secret, reconciled from any of the wire shapes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SecretRecord {
    pub name: String,
    /// Write-only, never populated from the server reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub secret_type: SecretType,
    pub org: Option<String>,
    pub repo: Option<String>,
    pub team: Option<String>,
    /// Empty list means the secret is available to all images.
    pub images: Vec<String>,
    pub events: BTreeSet<SecretEvent>,
    pub allow_command: bool,
    /// Present only for secrets that were read back from the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<SecretAudit>,
}

impl SecretRecord {
    /// Creates an unsaved repository secret record with the default field values.
    pub fn empty<O: Into<String>, R: Into<String>>(org: O, repo: R) -> Self {
        Self {
            name: String::new(),
            value: None,
            secret_type: SecretType::Repo,
            org: Some(org.into()),
            repo: Some(repo.into()),
            team: None,
            images: vec![],
            events: BTreeSet::new(),
            allow_command: true,
            audit: None,
        }
    }

    /// Reconciles a raw secret into the canonical record for the form with the given context. In
    /// `add` mode the raw secret is ignored, in `edit` and `view` modes it must be a read shape.
    pub fn normalize(raw: Option<SecretShape>, context: &SecretFormContext) -> anyhow::Result<Self> {
        match (context.mode, raw) {
            (FormMode::Add, _) => Ok(Self::empty(&context.org, &context.repo)),
            (_, Some(SecretShape::Read(secret))) => Self::try_from(*secret),
            (mode, Some(shape)) => bail!(
                "Secret form in {mode} mode requires a read secret shape, but got a {} shape.",
                shape.kind()
            ),
            (mode, None) => bail!("Secret form in {mode} mode requires an existing secret."),
        }
    }

    /// A record is persisted if the server has assigned it an identifier.
    pub fn is_persisted(&self) -> bool {
        self.audit.is_some()
    }
}

impl TryFrom<Secret> for SecretRecord {
    type Error = anyhow::Error;

    fn try_from(secret: Secret) -> Result<Self, Self::Error> {
        let params = secret.params;
        if params.secret_type == SecretType::Repo {
            if params.org.is_empty() || params.repo.is_empty() {
                bail!(
                    "Repository secret ({}) must have both organization and repository.",
                    params.name
                );
            }

            if params.team.is_some() {
                bail!(
                    "Repository secret ({}) cannot be scoped to a team.",
                    params.name
                );
            }
        }

        Ok(Self {
            name: params.name,
            value: None,
            secret_type: params.secret_type,
            org: Some(params.org).filter(|org| !org.is_empty()),
            repo: Some(params.repo).filter(|repo| !repo.is_empty()),
            team: params.team,
            images: params.images,
            events: params.events.into_iter().collect(),
            allow_command: params.allow_command,
            audit: Some(SecretAudit {
                id: secret.id,
                created_at: secret.created_at,
                created_by: secret.created_by,
                updated_at: secret.updated_at,
                updated_by: secret.updated_by,
            }),
        })
    }
}
