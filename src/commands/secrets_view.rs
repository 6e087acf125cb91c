use crate::{
    api::Api,
    commands::{
        form_args::{required_arg, with_repo_args, with_secret_arg},
        form_report::fields_report,
    },
    forms::{SecretForm, SecretFormContext, SecretFormPhase},
};
use anyhow::bail;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    with_secret_arg(with_repo_args(
        Command::new("view").about("Displays an existing repository secret."),
    ))
}

pub async fn run(api: &Api, matches: &ArgMatches) -> anyhow::Result<String> {
    let context = SecretFormContext::view(
        required_arg(matches, "ORG")?,
        required_arg(matches, "REPO")?,
        required_arg(matches, "SECRET")?,
    );

    let vela = api.vela();
    let form = SecretForm::open(&vela, context).await;
    if let SecretFormPhase::Failed(message) = form.phase() {
        bail!("Failed to load secret: {message}");
    }

    Ok(fields_report(&form))
}

#[cfg(test)]
mod tests {
    use super::{command, run};
    use crate::tests::{mock_api_with_host, mock_secret};
    use httpmock::MockServer;

    #[tokio::test]
    async fn displays_secret() -> anyhow::Result<()> {
        let server = MockServer::start();
        let api = mock_api_with_host(&server.base_url())?;

        let mut secret = mock_secret()?;
        secret.params.images = vec![];
        let get_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/api/v1/secrets/native/repo/acme/widgets/API_KEY");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body_obj(&secret);
        });

        let matches = command().try_get_matches_from([
            "view", "--org", "acme", "--repo", "widgets", "--secret", "API_KEY",
        ])?;
        let report = run(&api, &matches).await?;

        assert!(report.contains("Name: \"API_KEY\"\n"));
        assert!(report.contains("Images:\n  enabled for all images\n"));
        get_mock.assert();

        Ok(())
    }

    #[test]
    fn requires_secret_name() {
        assert!(
            command()
                .try_get_matches_from(["view", "--org", "acme", "--repo", "widgets"])
                .is_err()
        );
    }
}
