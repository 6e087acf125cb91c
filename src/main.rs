#![deny(warnings)]

use anyhow::anyhow;
use clap::{Arg, Command, crate_authors, crate_description, crate_version};
use std::env;
use tracing::info;
use vela_console::{
    commands,
    config::{Config, RawConfig},
};

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let matches = Command::new("Vela console")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg(
            Arg::new("CONFIG")
                .env("VELA_CONFIG")
                .short('c')
                .long("config")
                .global(true)
                .default_value("vela.toml")
                .help("Path to the console configuration file."),
        )
        .subcommand(commands::secrets_command())
        .get_matches();

    let raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    info!("Vela console raw configuration: {raw_config:?}.");

    commands::run(Config::from(raw_config), &matches)
}
