//! contact-relay binary

use std::path::PathBuf;

use clap::Parser;
use contact_relay::{config::RelayConfig, observability, server};

/// Contact form backend that relays submissions as HTML email over SMTP
#[derive(Debug, Parser)]
#[command(name = "contact-relay", version, about)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    observability::init()?;

    let config = match cli.config {
        Some(path) if !path.exists() => {
            anyhow::bail!("configuration file not found: {}", path.display())
        }
        Some(path) => RelayConfig::load_from(&path)?,
        None => RelayConfig::load()?,
    };

    server::serve(config).await
}
