use crate::{forms::SecretFormFields, secrets::SecretEvent};
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

/// Adds the arguments that identify the repository the secrets belong to.
pub fn with_repo_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("ORG")
                .long("org")
                .required(true)
                .help("Organization the repository belongs to."),
        )
        .arg(
            Arg::new("REPO")
                .long("repo")
                .required(true)
                .help("Name of the repository."),
        )
}

/// Adds the argument with the name of the existing secret.
pub fn with_secret_arg(command: Command) -> Command {
    command.arg(
        Arg::new("SECRET")
            .long("secret")
            .required(true)
            .help("Name of the existing secret."),
    )
}

/// Adds the arguments that set the secret form fields.
pub fn with_field_args(command: Command, name_required: bool) -> Command {
    command
        .arg(
            Arg::new("NAME")
                .long("name")
                .required(name_required)
                .help("Name of the secret."),
        )
        .arg(
            Arg::new("VALUE")
                .long("value")
                .help("Value of the secret, leave empty to keep the stored value."),
        )
        .arg(
            Arg::new("EVENT")
                .long("event")
                .action(ArgAction::Append)
                .value_parser(SecretEvent::ALL.map(|event| event.as_str()))
                .help("Event the secret is available for, can be repeated."),
        )
        .arg(
            Arg::new("IMAGE")
                .long("image")
                .action(ArgAction::Append)
                .help("Image the secret is restricted to, can be repeated."),
        )
        .arg(
            Arg::new("CLEAR_IMAGES")
                .long("clear-images")
                .action(ArgAction::SetTrue)
                .conflicts_with("IMAGE")
                .help("Make the secret available to all images."),
        )
        .arg(
            Arg::new("ALLOW_COMMAND")
                .long("allow-command")
                .value_parser(value_parser!(bool))
                .help("Whether the secret is available to steps with commands."),
        )
}

/// Returns the value of the required argument.
pub fn required_arg<'a>(matches: &'a ArgMatches, id: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("<{id}> argument is not provided."))
}

/// Applies the provided arguments to the form fields, fields without arguments stay intact.
pub fn apply_field_args(fields: &mut SecretFormFields, matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(name) = matches.get_one::<String>("NAME") {
        fields.name = name.clone();
    }

    if let Some(value) = matches.get_one::<String>("VALUE") {
        fields.value = value.clone();
    }

    if let Some(events) = matches.get_many::<String>("EVENT") {
        fields.set_events(
            events
                .map(|event| event.parse::<SecretEvent>())
                .collect::<anyhow::Result<Vec<_>>>()?,
        );
    }

    if matches.get_flag("CLEAR_IMAGES") {
        fields.images.clear();
    }

    if let Some(images) = matches.get_many::<String>("IMAGE") {
        fields.images.clear();
        for image in images {
            fields.images.append(image.as_str());
        }
    }

    if let Some(allow_command) = matches.get_one::<bool>("ALLOW_COMMAND") {
        fields.allow_command = *allow_command;
    }

    Ok(())
}
