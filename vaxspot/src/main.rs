use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;

use vaxspot::config::SearchConfig;
use vaxspot::module::feed::{FeedClient, FetchError};
use vaxspot::module::notify::NoopNotifier;
use vaxspot::output::captured_stdout;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Every "ago" in the report is measured from this instant
    let now = Utc::now();

    let config = SearchConfig::load()?;

    let _logging_guard =
        vaxspot::logging::init_logging(&config.log_dir, "vaxspot", &config.log_level)?;

    tracing::info!("vaxspot starting, searching {} miles around {:?}", config.threshold_miles, config.reference);

    let client = FeedClient::new(&config)?;
    let mut out = captured_stdout();

    let sites = match client.fetch_sites().await {
        Ok(sites) => sites,
        Err(FetchError::Status(status)) => {
            tracing::error!("Giving up, feed returned HTTP {}", status);
            writeln!(out, "Error retrieving")?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Failed to fetch appointment feed"),
    };

    let found = vaxspot::run(&sites, &config, now, &mut out, &NoopNotifier)?;
    tracing::info!("Done, {} sites reported", found);

    Ok(ExitCode::SUCCESS)
}
