use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use support_queue_core::{load_config, validate_config, Config, SupportDesk};

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "SUPPORT_QUEUE_CONFIG";

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr; stdout carries only the ticket report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            load_config(&config_path)
                .with_context(|| format!("Failed to load config from {:?}", config_path))?
        }
        None => {
            info!("{} not set, using built-in defaults", CONFIG_ENV);
            Config::default()
        }
    };

    validate_config(&config).context("Configuration validation failed")?;

    info!("Strategy: {}", config.queue.strategy);
    info!("Output format: {:?}", config.output.format);

    let mut desk = SupportDesk::from_config(&config);
    info!("Submitted {} tickets", desk.tickets().len());

    let strategy = config.queue.strategy.strategy();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // process_all flushes the sink before returning
    desk.process_all(strategy.as_ref(), &mut out)
        .context("Failed to process tickets")?;

    Ok(())
}
