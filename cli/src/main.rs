//! CLI entrypoint for motordoc
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use motordoc_application::DiagnosisSession;
use motordoc_infrastructure::{ConfigLoader, HttpDiagnosticGateway};
use motordoc_presentation::{Cli, Command, ConsolePresenter, ShellRepl, disable_color, load_image};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.no_color {
        disable_color();
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to load configuration")?
    };

    info!(base_url = %config.api.base_url, "starting motordoc");

    // === Dependency Injection ===
    // No timeout: requests run to completion or failure.
    let client = reqwest::Client::new();
    let gateway = Arc::new(HttpDiagnosticGateway::new(client, config.api.base_url));
    let mut session = DiagnosisSession::new(gateway);
    let presenter = ConsolePresenter::new(cli.quiet);

    match cli.command {
        Some(Command::Identify { query, image }) => match (query, image) {
            (_, Some(path)) => {
                let image = load_image(&path.to_string_lossy())
                    .map_err(|message| anyhow::anyhow!(message))?;
                session.identify_from_image(&image, &presenter).await;
            }
            (Some(query), None) => {
                session.identify_from_text(&query, &presenter).await;
            }
            (None, None) => {
                session.identify_from_text("", &presenter).await;
            }
        },
        Some(Command::Diagnose {
            description,
            vehicle,
            image,
        }) => {
            session.identify_from_text(&vehicle, &presenter).await;
            if !session.has_vehicle() {
                // Identification already rendered its failure; nothing to diagnose.
                std::process::exit(1);
            }
            match image {
                Some(path) => {
                    let image = load_image(&path.to_string_lossy())
                        .map_err(|message| anyhow::anyhow!(message))?;
                    session
                        .diagnose_from_image(&description, &image, &presenter)
                        .await;
                }
                None => {
                    session.diagnose_from_text(&description, &presenter).await;
                }
            }
        }
        Some(Command::Health) => {
            session.check_health(&presenter).await;
        }
        Some(Command::Shell) | None => {
            let mut repl = ShellRepl::new(session, presenter);
            repl.run().await?;
        }
    }

    Ok(())
}
