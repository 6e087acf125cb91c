use crate::{
    api::Api,
    commands::form_args::{required_arg, with_repo_args},
    pager::{PageDirection, Pager},
    secrets::SecretPath,
};
use clap::{Arg, ArgMatches, Command, value_parser};
use std::fmt::Write;
use tracing::debug;

pub fn command() -> Command {
    with_repo_args(Command::new("list").about("Lists repository secrets page by page.")).arg(
        Arg::new("PAGE")
            .long("page")
            .value_parser(value_parser!(u32).range(1..))
            .default_value("1")
            .help("Page of the secrets list, starting from 1."),
    )
}

pub async fn run(api: &Api, matches: &ArgMatches) -> anyhow::Result<String> {
    let path = SecretPath::native_repo(
        required_arg(matches, "ORG")?,
        required_arg(matches, "REPO")?,
    );
    let page = matches.get_one::<u32>("PAGE").copied().unwrap_or(1);
    let per_page = api.config.secrets.per_page;

    let secrets = api
        .vela()
        .list_secrets(&path, page, per_page)
        .await?;
    debug!(
        secret.org = %path.org,
        secret.repo = %path.repo,
        "Retrieved {} secrets (page {page}).",
        secrets.len()
    );

    let mut report = String::new();
    if secrets.is_empty() {
        let _ = writeln!(report, "No secrets found.");
    }
    for secret in secrets {
        let events = secret
            .params
            .events
            .iter()
            .map(|event| event.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(report, "{} [{events}]", secret.params.name);
    }

    let pager = Pager::new(
        page,
        format!("{}?per_page={per_page}", path.list_location()),
    );
    for direction in [PageDirection::Newer, PageDirection::Older] {
        let _ = writeln!(
            report,
            "{}: {}",
            direction.label(),
            pager.destination(direction)?
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{command, run};
    use crate::tests::{mock_api_with_host, mock_secret};
    use httpmock::MockServer;
    use insta::assert_snapshot;

    #[tokio::test]
    async fn lists_secrets_with_pager() -> anyhow::Result<()> {
        let server = MockServer::start();
        let api = mock_api_with_host(&server.base_url())?;

        let list_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/api/v1/secrets/native/repo/acme/widgets")
                .query_param("page", "2")
                .query_param("per_page", "10");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body_obj(&vec![mock_secret().unwrap()]);
        });

        let matches = command().try_get_matches_from([
            "list", "--org", "acme", "--repo", "widgets", "--page", "2",
        ])?;
        assert_snapshot!(run(&api, &matches).await?, @r###"
        API_KEY [push, tag]
        ← newer: /acme/widgets/secrets/native?per_page=10&page=1
        older →: /acme/widgets/secrets/native?per_page=10&page=3
        "###);
        list_mock.assert();

        Ok(())
    }

    #[test]
    fn rejects_zero_page() {
        assert!(
            command()
                .try_get_matches_from(["list", "--org", "acme", "--repo", "widgets", "--page", "0"])
                .is_err()
        );
    }
}
