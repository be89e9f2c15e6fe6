use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use skycast_core::{
    Config, WeatherLookup, config::API_KEY_ENV, provider::provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for a city")]
pub struct Cli {
    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default city.
    Configure,

    /// Show current weather for a city once.
    Show {
        /// City name; the configured default city when absent.
        city: Option<String>,

        /// Print the snapshot, icon and backdrop as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up the default city, then keep prompting for more.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(city, json).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message(&format!("Stored in the config file; {API_KEY_ENV} overrides it"))
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    cfg.set_api_key(api_key.trim().to_string());

    let city = Text::new("Default city:")
        .with_default(&cfg.default_city)
        .prompt()
        .context("Failed to read default city")?;
    cfg.set_default_city(&city);

    let path = cfg.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(city: Option<String>, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;
    let city = city.unwrap_or_else(|| cfg.default_city.clone());

    let mut lookup = WeatherLookup::new(provider);
    lookup.set_query(city.as_str());

    match lookup.submit_current().await {
        Ok(snapshot) if json => {
            let out = serde_json::to_string_pretty(&render::json_view(&snapshot))
                .context("Failed to serialize weather snapshot")?;
            println!("{out}");
        }
        Ok(_) => {
            render::print_header();
            print!("{}", render::render_state(lookup.state()));
        }
        Err(err) => {
            tracing::debug!(error = ?err, "lookup failed");
            anyhow::bail!("{err}");
        }
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;

    render::print_header();
    println!("Loading weather data for {}...", cfg.default_city);

    let mut lookup = WeatherLookup::start(provider, &cfg.default_city).await;
    print!("{}", render::render_state(lookup.state()));

    loop {
        println!();
        let input = match Text::new("City:")
            .with_placeholder("Enter city name...")
            .with_help_message(":q to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        if input.trim() == ":q" {
            break;
        }

        lookup.set_query(input);
        // Failures are part of the state and rendered below.
        let _ = lookup.submit_current().await;
        print!("{}", render::render_state(lookup.state()));
    }

    Ok(())
}
