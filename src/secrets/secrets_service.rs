use crate::secrets::{Secret, SecretPath, SecretWriteParams};
use futures::future::BoxFuture;

/// Remote storage of secrets the console works with. Failures are expected to be reported as
/// [`crate::error::Error`] so that their kind and payload can be inspected.
pub trait SecretsService: Sync + Send {
    /// Retrieves the secret with the specified name.
    fn get_secret<'a>(
        &'a self,
        path: &'a SecretPath,
        name: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Secret>>;

    /// Creates a new secret.
    fn create_secret<'a>(
        &'a self,
        path: &'a SecretPath,
        params: &'a SecretWriteParams,
    ) -> BoxFuture<'a, anyhow::Result<Secret>>;

    /// Updates the secret that is currently stored under the specified name.
    fn update_secret<'a>(
        &'a self,
        path: &'a SecretPath,
        name: &'a str,
        params: &'a SecretWriteParams,
    ) -> BoxFuture<'a, anyhow::Result<Secret>>;

    /// Retrieves a page of the secrets (1-based).
    fn list_secrets<'a>(
        &'a self,
        path: &'a SecretPath,
        page: u32,
        per_page: u32,
    ) -> BoxFuture<'a, anyhow::Result<Vec<Secret>>>;
}

#[cfg(test)]
pub mod tests {
    use crate::{
        error::{Error as VelaError, ErrorBody},
        secrets::{Secret, SecretPath, SecretWriteParams, SecretsService},
    };
    use futures::future::BoxFuture;
    use std::sync::Mutex;
    use time::OffsetDateTime;

    /// Call received by the `MockSecretsService`.
    #[derive(Debug, Clone, PartialEq)]
    pub enum MockSecretsCall {
        Get {
            path: SecretPath,
            name: String,
        },
        Create {
            path: SecretPath,
            params: SecretWriteParams,
        },
        Update {
            path: SecretPath,
            name: String,
            params: SecretWriteParams,
        },
        List {
            path: SecretPath,
            page: u32,
            per_page: u32,
        },
    }

    /// In-memory secrets service: serves the stored secret and echoes writes back as persisted
    /// secrets, or fails every write with the configured failure payload.
    #[derive(Default)]
    pub struct MockSecretsService {
        secret: Option<Secret>,
        write_failure: Option<Option<ErrorBody>>,
        calls: Mutex<Vec<MockSecretsCall>>,
    }

    impl MockSecretsService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_secret(secret: Secret) -> Self {
            Self {
                secret: Some(secret),
                ..Default::default()
            }
        }

        /// Makes every create and update call fail with the specified payload.
        pub fn set_write_failure(mut self, body: Option<ErrorBody>) -> Self {
            self.write_failure = Some(body);
            self
        }

        pub fn calls(&self) -> Vec<MockSecretsCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: MockSecretsCall) {
            self.calls.lock().unwrap().push(call);
        }

        fn write(&self, params: &SecretWriteParams) -> anyhow::Result<Secret> {
            match self.write_failure {
                Some(Some(ref body)) => Err(VelaError::validation_with_body(
                    anyhow::anyhow!("Write rejected."),
                    body.clone(),
                )
                .into()),
                Some(None) => Err(VelaError::transport(anyhow::anyhow!("Connection reset.")).into()),
                None => Ok(Secret {
                    id: 42,
                    created_at: OffsetDateTime::from_unix_timestamp(1262340000)?,
                    created_by: "octocat".to_string(),
                    updated_at: OffsetDateTime::from_unix_timestamp(1262343600)?,
                    updated_by: "octokitty".to_string(),
                    params: SecretWriteParams {
                        value: None,
                        ..params.clone()
                    },
                }),
            }
        }
    }

    impl SecretsService for MockSecretsService {
        fn get_secret<'a>(
            &'a self,
            path: &'a SecretPath,
            name: &'a str,
        ) -> BoxFuture<'a, anyhow::Result<Secret>> {
            self.record(MockSecretsCall::Get {
                path: path.clone(),
                name: name.to_string(),
            });

            let result: anyhow::Result<Secret> = self
                .secret
                .clone()
                .filter(|secret| secret.params.name == name)
                .ok_or_else(|| {
                    VelaError::not_found(format!("Secret ({name}) not found."), None).into()
                });
            Box::pin(futures::future::ready(result))
        }

        fn create_secret<'a>(
            &'a self,
            path: &'a SecretPath,
            params: &'a SecretWriteParams,
        ) -> BoxFuture<'a, anyhow::Result<Secret>> {
            self.record(MockSecretsCall::Create {
                path: path.clone(),
                params: params.clone(),
            });
            Box::pin(futures::future::ready(self.write(params)))
        }

        fn update_secret<'a>(
            &'a self,
            path: &'a SecretPath,
            name: &'a str,
            params: &'a SecretWriteParams,
        ) -> BoxFuture<'a, anyhow::Result<Secret>> {
            self.record(MockSecretsCall::Update {
                path: path.clone(),
                name: name.to_string(),
                params: params.clone(),
            });
            Box::pin(futures::future::ready(self.write(params)))
        }

        fn list_secrets<'a>(
            &'a self,
            path: &'a SecretPath,
            page: u32,
            per_page: u32,
        ) -> BoxFuture<'a, anyhow::Result<Vec<Secret>>> {
            self.record(MockSecretsCall::List {
                path: path.clone(),
                page,
                per_page,
            });
            let result: anyhow::Result<Vec<Secret>> = Ok(self
                .secret
                .iter()
                .filter(|_| page == 1)
                .cloned()
                .collect());
            Box::pin(futures::future::ready(result))
        }
    }
}
