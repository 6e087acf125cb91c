mod form_args;
mod form_report;
mod secrets_add;
mod secrets_edit;
mod secrets_list;
mod secrets_view;

use crate::{api::Api, config::Config, network::Network};
use anyhow::bail;
use clap::{ArgMatches, Command};
use tracing::debug;

/// Command to manage the repository secrets.
pub fn secrets_command() -> Command {
    Command::new("secrets")
        .about("Manages repository secrets.")
        .subcommand_required(true)
        .subcommand(secrets_add::command())
        .subcommand(secrets_edit::command())
        .subcommand(secrets_view::command())
        .subcommand(secrets_list::command())
}

/// Runs the console command on a single-threaded runtime and prints its report.
#[tokio::main(flavor = "current_thread")]
pub async fn run(config: Config, matches: &ArgMatches) -> anyhow::Result<()> {
    let network = Network::create(&config.http.client)?;
    let api = Api::new(config, network);

    let report = match matches.subcommand() {
        Some(("secrets", matches)) => run_secrets(&api, matches).await?,
        Some((name, _)) => bail!("Unknown command ({name})."),
        None => bail!("Command is not provided."),
    };

    print!("{report}");
    Ok(())
}

async fn run_secrets(api: &Api, matches: &ArgMatches) -> anyhow::Result<String> {
    let (name, matches) = matches
        .subcommand()
        .ok_or_else(|| anyhow::anyhow!("Secrets command is not provided."))?;
    debug!("Running secrets {name} command.");

    match name {
        "add" => secrets_add::run(api, matches).await,
        "edit" => secrets_edit::run(api, matches).await,
        "view" => secrets_view::run(api, matches).await,
        "list" => secrets_list::run(api, matches).await,
        _ => bail!("Unknown secrets command ({name})."),
    }
}

#[cfg(test)]
mod tests {
    use super::{run_secrets, secrets_command};
    use crate::tests::mock_api_with_host;
    use clap::Command;

    #[test]
    fn requires_subcommand() {
        assert!(
            Command::new("vela-console")
                .subcommand(secrets_command())
                .try_get_matches_from(["vela-console", "secrets"])
                .is_err()
        );
    }

    #[tokio::test]
    async fn rejects_unexpected_args_and_unreachable_hosts() -> anyhow::Result<()> {
        // View command doesn't accept any field arguments.
        assert!(
            secrets_command()
                .try_get_matches_from([
                    "secrets", "view", "--org", "acme", "--repo", "widgets", "--secret", "API_KEY",
                    "--name", "OTHER",
                ])
                .is_err()
        );

        let api = mock_api_with_host("http://localhost:1")?;
        let matches = secrets_command().try_get_matches_from([
            "secrets", "list", "--org", "acme", "--repo", "widgets",
        ])?;
        assert!(run_secrets(&api, &matches).await.is_err());

        Ok(())
    }
}
