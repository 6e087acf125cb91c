use crate::{
    api::Api,
    error::{Error as VelaError, ErrorBody},
    secrets::{Secret, SecretPath, SecretWriteParams, SecretsService},
};
use anyhow::{Context, anyhow, bail};
use futures::future::BoxFuture;
use reqwest::{Method, Response, StatusCode};
use reqwest_middleware::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

/// API to work with the secrets stored in Vela.
pub struct VelaApi<'a> {
    api: &'a Api,
}

impl<'a> VelaApi<'a> {
    /// Creates Vela API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Retrieves the secret with the specified name.
    pub async fn get_secret(&self, path: &SecretPath, name: &str) -> anyhow::Result<Secret> {
        let response = self
            .request(Method::GET, self.secret_endpoint(path, name)?)
            .send()
            .await
            .map_err(|err| {
                VelaError::transport(anyhow!(err).context(format!("Cannot retrieve secret ({name}).")))
            })?;

        read_response(response, format!("secret ({name})")).await
    }

    /// Creates a new secret.
    pub async fn create_secret(
        &self,
        path: &SecretPath,
        params: &SecretWriteParams,
    ) -> anyhow::Result<Secret> {
        let response = self
            .request(Method::POST, self.secrets_endpoint(path)?)
            .json(params)
            .send()
            .await
            .map_err(|err| {
                VelaError::transport(
                    anyhow!(err).context(format!("Cannot create secret ({}).", params.name)),
                )
            })?;

        read_response(response, format!("created secret ({})", params.name)).await
    }

    /// Updates the secret stored under the specified name.
    pub async fn update_secret(
        &self,
        path: &SecretPath,
        name: &str,
        params: &SecretWriteParams,
    ) -> anyhow::Result<Secret> {
        let response = self
            .request(Method::PUT, self.secret_endpoint(path, name)?)
            .json(params)
            .send()
            .await
            .map_err(|err| {
                VelaError::transport(anyhow!(err).context(format!("Cannot update secret ({name}).")))
            })?;

        read_response(response, format!("updated secret ({name})")).await
    }

    /// Retrieves a page (1-based) of the secrets.
    pub async fn list_secrets(
        &self,
        path: &SecretPath,
        page: u32,
        per_page: u32,
    ) -> anyhow::Result<Vec<Secret>> {
        let response = self
            .request(Method::GET, self.secrets_endpoint(path)?)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(|err| {
                VelaError::transport(anyhow!(err).context(format!("Cannot list secrets ({page}).")))
            })?;

        read_response(response, format!("secrets page ({page})")).await
    }

    fn secrets_endpoint(&self, path: &SecretPath) -> anyhow::Result<Url> {
        self.endpoint(&format!("api/v1/secrets/{}", path.to_url_path()))
    }

    fn secret_endpoint(&self, path: &SecretPath, name: &str) -> anyhow::Result<Url> {
        self.endpoint(&format!(
            "api/v1/secrets/{}/{}",
            path.to_url_path(),
            urlencoding::encode(name)
        ))
    }

    /// Joins the relative endpoint path onto the host, keeping the host path prefix if any.
    fn endpoint(&self, relative_path: &str) -> anyhow::Result<Url> {
        let mut host = self.api.config.api.host.clone();
        if !host.path().ends_with('/') {
            let prefix = format!("{}/", host.path());
            host.set_path(&prefix);
        }

        host.join(relative_path)
            .with_context(|| format!("Cannot build Vela API endpoint ({relative_path})."))
    }

    fn request(&self, method: Method, endpoint: Url) -> RequestBuilder {
        let request = self
            .api
            .network
            .client_for(&method)
            .request(method, endpoint);
        match self.api.config.api.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Deserializes a successful response, or converts the failed one to the error that carries the
/// response body.
async fn read_response<T: DeserializeOwned>(response: Response, subject: String) -> anyhow::Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .with_context(|| format!("Cannot deserialize {subject}."));
    }

    let body = response.text().await.map_err(|err| {
        VelaError::transport(anyhow!(err).context(format!("Cannot read failure of {subject}.")))
    })?;
    let message = format!("Request for {subject} failed ({status}): {body}");
    let body = ErrorBody::Text(body);
    if status == StatusCode::NOT_FOUND {
        bail!(VelaError::not_found(message, Some(body)))
    } else if status.is_client_error() {
        bail!(VelaError::validation_with_body(anyhow!(message), body))
    } else {
        bail!(VelaError::transport_with_body(anyhow!(message), body))
    }
}

impl SecretsService for VelaApi<'_> {
    fn get_secret<'a>(
        &'a self,
        path: &'a SecretPath,
        name: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Secret>> {
        Box::pin(VelaApi::get_secret(self, path, name))
    }

    fn create_secret<'a>(
        &'a self,
        path: &'a SecretPath,
        params: &'a SecretWriteParams,
    ) -> BoxFuture<'a, anyhow::Result<Secret>> {
        Box::pin(VelaApi::create_secret(self, path, params))
    }

    fn update_secret<'a>(
        &'a self,
        path: &'a SecretPath,
        name: &'a str,
        params: &'a SecretWriteParams,
    ) -> BoxFuture<'a, anyhow::Result<Secret>> {
        Box::pin(VelaApi::update_secret(self, path, name, params))
    }

    fn list_secrets<'a>(
        &'a self,
        path: &'a SecretPath,
        page: u32,
        per_page: u32,
    ) -> BoxFuture<'a, anyhow::Result<Vec<Secret>>> {
        Box::pin(VelaApi::list_secrets(self, path, page, per_page))
    }
}

impl Api {
    /// Returns an API to work with Vela.
    pub fn vela(&self) -> VelaApi<'_> {
        VelaApi::new(self)
    }
}
