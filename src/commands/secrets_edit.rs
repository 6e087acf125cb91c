use crate::{
    api::Api,
    commands::{
        form_args::{
            apply_field_args, required_arg, with_field_args, with_repo_args, with_secret_arg,
        },
        form_report::{submission_failed, submission_report},
    },
    forms::{SecretForm, SecretFormContext, SecretFormPhase},
};
use anyhow::bail;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    with_field_args(
        with_secret_arg(with_repo_args(
            Command::new("edit").about("Updates an existing repository secret."),
        )),
        false,
    )
}

pub async fn run(api: &Api, matches: &ArgMatches) -> anyhow::Result<String> {
    let context = SecretFormContext::edit(
        required_arg(matches, "ORG")?,
        required_arg(matches, "REPO")?,
        required_arg(matches, "SECRET")?,
    );

    let vela = api.vela();
    let mut form = SecretForm::open(&vela, context).await;
    if let SecretFormPhase::Failed(message) = form.phase() {
        bail!("Failed to load secret: {message}");
    }

    if let Some(fields) = form.fields_mut() {
        apply_field_args(fields, matches)?;
    }

    form.submit().await?;
    let report = submission_report(&form);
    if submission_failed(&form) {
        bail!(report.trim_end().to_string());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{command, run};
    use crate::tests::{mock_api_with_host, mock_secret};
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn updates_secret_by_original_name() -> anyhow::Result<()> {
        let server = MockServer::start();
        let api = mock_api_with_host(&server.base_url())?;

        let secret = mock_secret()?;
        let get_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/api/v1/secrets/native/repo/acme/widgets/API_KEY");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body_obj(&secret);
        });
        let update_mock = server.mock(|when, then| {
            when.method(httpmock::Method::PUT)
                .path("/api/v1/secrets/native/repo/acme/widgets/API_KEY")
                .json_body(json!({
                    "org": "acme",
                    "repo": "widgets",
                    "team": null,
                    "name": "API_TOKEN",
                    "type": "repo",
                    "images": ["alpine:latest", "golang:1.22"],
                    "events": ["push", "tag"],
                    "allow_command": true
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body_obj(&secret);
        });

        let matches = command().try_get_matches_from([
            "edit", "--org", "acme", "--repo", "widgets", "--secret", "API_KEY", "--name",
            "API_TOKEN", "--allow-command", "true",
        ])?;
        let report = run(&api, &matches).await?;

        assert!(report.starts_with("Success: Successfully saved your secret"));
        get_mock.assert();
        update_mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn fails_when_secret_is_missing() -> anyhow::Result<()> {
        let server = MockServer::start();
        let api = mock_api_with_host(&server.base_url())?;
        let get_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/api/v1/secrets/native/repo/acme/widgets/API_KEY");
            then.status(404).body(r#"{"error":"unable to get secret"}"#);
        });
        let update_mock = server.mock(|when, then| {
            when.method(httpmock::Method::PUT);
            then.status(200);
        });

        let matches = command().try_get_matches_from([
            "edit", "--org", "acme", "--repo", "widgets", "--secret", "API_KEY",
        ])?;
        let err = run(&api, &matches).await.unwrap_err();

        assert!(
            err.to_string()
                .starts_with("Failed to load secret: Cannot load secret (API_KEY).")
        );
        get_mock.assert();
        update_mock.assert_calls(0);

        Ok(())
    }
}
