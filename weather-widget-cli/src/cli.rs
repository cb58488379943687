use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use weather_widget_core::{Config, FormHandler, MemoryPage, Outcome};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Weather lookup widget")]
pub struct Cli {
    /// Backend base URL for this run, overriding the configured one.
    #[arg(long, global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the backend and photo service URLs.
    Configure {
        /// Base URL of the server exposing `/get-weather`.
        #[arg(long = "server")]
        server: Option<String>,

        /// Base URL of the featured-photo service.
        #[arg(long)]
        photos: Option<String>,
    },

    /// Look up one city and print the result.
    Show {
        /// City name.
        city: String,
    },

    /// Keep prompting for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { server, photos } => configure(server, photos),
            Command::Show { city } => {
                let config = effective_config(self.backend)?;
                let page = Arc::new(MemoryPage::new());
                let handler = FormHandler::from_config(page.clone(), &config);

                page.set_input_value(city);
                let outcome = handler.submit().await;
                handler.settle().await;

                print!("{}", output::render_page(&page.snapshot()));
                exit_status(&outcome)
            }
            Command::Interactive => interactive(effective_config(self.backend)?).await,
        }
    }
}

fn effective_config(backend: Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(url) = backend {
        config.set_backend_url(url)?;
    }
    tracing::debug!(
        backend = config.backend_url(),
        photos = config.photo_base_url(),
        "using configuration"
    );
    Ok(config)
}

/// Turns a failed lookup into an error so scripts see a non-zero exit status.
fn exit_status(outcome: &Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Failed(message) => anyhow::bail!("lookup failed: {message}"),
        Outcome::Ignored => anyhow::bail!("City name is empty."),
        Outcome::Rendered | Outcome::Superseded => Ok(()),
    }
}

fn configure(server: Option<String>, photos: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let server = match server {
        Some(url) => url,
        None => Text::new("Backend URL:")
            .with_default(config.backend_url())
            .prompt()
            .context("Failed to read backend URL")?,
    };
    let photos = match photos {
        Some(url) => url,
        None => Text::new("Photo service URL:")
            .with_default(config.photo_base_url())
            .prompt()
            .context("Failed to read photo service URL")?,
    };

    config.set_backend_url(server)?;
    config.set_photo_base_url(photos)?;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn interactive(config: Config) -> anyhow::Result<()> {
    let page = Arc::new(MemoryPage::new());
    let handler = FormHandler::from_config(page.clone(), &config);

    loop {
        let city = match Text::new("City:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        page.set_input_value(city);
        if handler.submit().await == Outcome::Ignored {
            continue;
        }
        handler.settle().await;

        print!("{}", output::render_page(&page.snapshot()));
    }

    Ok(())
}
