use anyhow::Context;
use clap::Parser;
use secondmax::cli::{Cli, commands};
use secondmax::config::Settings;
use secondmax::io::{ComputeData, Envelope, ExitCode, ResultCode};
use secondmax::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            if cli.json {
                let envelope: Envelope<ComputeData> = Envelope::error(
                    ResultCode::ConfigError,
                    ExitCode::GeneralError,
                    e.to_string(),
                );
                match serde_json::to_string_pretty(&envelope) {
                    Ok(s) => println!("{s}"),
                    Err(e) => eprintln!("Error serializing output: {e}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            return ExitCode::GeneralError.into();
        }
    };

    logging::init_with_config(&settings.logging);

    commands::run(&cli.tokens, &settings, cli.json).into()
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Settings::load().context("loading settings"),
    }
}
