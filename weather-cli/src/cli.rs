use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_core::{Config, FetchState, WeatherClient};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and default location.
    Configure,

    /// Show current conditions, air quality and the next hours for a location.
    Show {
        /// Address or location name; defaults to the configured location.
        location: Option<String>,
    },
}

pub fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,weather_core=debug",
        _ => "debug",
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(location).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(api_key);

    let location = Text::new("Default location:")
        .with_default(&config.default_location)
        .prompt()
        .context("Failed to read default location")?;

    if !location.trim().is_empty() {
        config.default_location = location.trim().to_string();
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: Option<String>) -> anyhow::Result<()> {
    let config = Config::load_with_env()?;
    let location = location
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| config.default_location.clone());

    debug!(%location, "showing weather");

    let client = WeatherClient::from_config(&config)?;
    client.fetch_weather(&location).await;

    match client.state() {
        FetchState::Success(data) => {
            print!("{}", render::report(&data));
            Ok(())
        }
        FetchState::Failure(message) => bail!(message),
        FetchState::Idle | FetchState::Loading => bail!("No weather data for '{location}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filters() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info,weather_core=debug");
        assert_eq!(log_filter_from_verbosity(5), "debug");
    }

    #[test]
    fn parses_show_with_and_without_location() {
        let cli = Cli::try_parse_from(["weather", "show", "New York"]).unwrap();
        assert!(matches!(cli.command, Command::Show { location: Some(ref l) } if l == "New York"));

        let cli = Cli::try_parse_from(["weather", "-vv", "show"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Show { location: None }));
    }

    #[test]
    fn parses_configure() {
        let cli = Cli::try_parse_from(["weather", "configure"]).unwrap();
        assert!(matches!(cli.command, Command::Configure));
    }
}
