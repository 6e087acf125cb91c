use crate::secrets::{Secret, SecretPath, SecretWriteParams, SecretsService};

/// Operation a submission is dispatched as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionTarget {
    Create,
    /// Update of the secret stored under the original name.
    Update { original_name: String },
}

/// Submission payload captured from the form, detached from the form state so that it can be
/// dispatched while the form keeps reporting the pending state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub path: SecretPath,
    pub target: SubmissionTarget,
    pub payload: SecretWriteParams,
}

impl SubmissionRequest {
    /// Dispatches the request to the secrets service.
    pub async fn dispatch<S: SecretsService + ?Sized>(&self, service: &S) -> anyhow::Result<Secret> {
        match self.target {
            SubmissionTarget::Create => service.create_secret(&self.path, &self.payload).await,
            SubmissionTarget::Update { ref original_name } => {
                service
                    .update_secret(&self.path, original_name, &self.payload)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmissionRequest, SubmissionTarget};
    use crate::{
        secrets::SecretPath,
        tests::{MockSecretsCall, MockSecretsService, mock_secret},
    };

    #[tokio::test]
    async fn dispatches_create_and_update() -> anyhow::Result<()> {
        let service = MockSecretsService::new();
        let payload = mock_secret()?.params;

        let request = SubmissionRequest {
            path: SecretPath::native_repo("acme", "widgets"),
            target: SubmissionTarget::Create,
            payload: payload.clone(),
        };
        let created = request.dispatch(&service).await?;
        assert_eq!(created.params, payload);

        let request = SubmissionRequest {
            target: SubmissionTarget::Update {
                original_name: "OLD_KEY".to_string(),
            },
            ..request
        };
        request.dispatch(&service).await?;

        assert_eq!(
            service.calls(),
            vec![
                MockSecretsCall::Create {
                    path: SecretPath::native_repo("acme", "widgets"),
                    params: payload.clone(),
                },
                MockSecretsCall::Update {
                    path: SecretPath::native_repo("acme", "widgets"),
                    name: "OLD_KEY".to_string(),
                    params: payload,
                }
            ]
        );

        Ok(())
    }
}
