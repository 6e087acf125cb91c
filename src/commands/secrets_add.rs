use crate::{
    api::Api,
    commands::{
        form_args::{apply_field_args, required_arg, with_field_args, with_repo_args},
        form_report::{submission_failed, submission_report},
    },
    forms::{SecretForm, SecretFormContext},
};
use anyhow::{Context, bail};
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    with_field_args(
        with_repo_args(Command::new("add").about("Creates a new repository secret.")),
        true,
    )
}

pub async fn run(api: &Api, matches: &ArgMatches) -> anyhow::Result<String> {
    let context = SecretFormContext::add(
        required_arg(matches, "ORG")?,
        required_arg(matches, "REPO")?,
    );

    let vela = api.vela();
    let mut form = SecretForm::open(&vela, context).await;
    apply_field_args(
        form.fields_mut()
            .context("Secret form is not initialized.")?,
        matches,
    )?;

    form.submit().await?;
    let report = submission_report(&form);
    if submission_failed(&form) {
        bail!(report.trim_end().to_string());
    }

    Ok(report)
}
