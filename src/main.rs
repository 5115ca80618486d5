use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use hotel_scout::config::{AppConfig, Cli};
use hotel_scout::{build_catalog, default_suppliers, HttpTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // clap's rendered error already carries the usage line
            let _ = err.print();
            std::process::exit(1);
        }
    };
    let config = AppConfig::from(cli);

    info!("🏨 Hotel Scout");

    let transport = HttpTransport::new(config.timeout_secs, &config.user_agent)
        .context("Failed to create HTTP client")?;
    let suppliers = default_suppliers(&config.endpoints);

    let catalog = build_catalog(&transport, &suppliers, config.failure_policy)
        .await
        .context("Failed to fetch supplier data")?;

    let hotels = catalog.filter(&config.filter);
    info!("✅ {} of {} hotels match the filter", hotels.len(), catalog.len());

    let json = serde_json::to_string_pretty(&hotels)?;
    println!("{}", json);

    Ok(())
}
