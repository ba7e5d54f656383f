pub mod config;
pub mod logging;
pub mod module;
pub mod output;

use std::io::Write;

use anyhow::Context;
use chrono::{DateTime, Utc};

use config::SearchConfig;
use module::feed::Site;
use module::notify::NotificationSink;
use module::report::Reporter;
use module::site::{enrich_sites, filter_sites};
use output::TeeWriter;

/// Filter, enrich, report and notify over already fetched sites.
///
/// `now` is the single instant every "ago" value is measured from.
/// The report is fully written and flushed before the notifier runs, and a
/// notifier failure is logged without failing the run.
/// Returns the number of sites reported.
pub fn run<A: Write>(
    sites: &[Site],
    config: &SearchConfig,
    now: DateTime<Utc>,
    out: &mut TeeWriter<A, Vec<u8>>,
    notifier: &dyn NotificationSink,
) -> anyhow::Result<usize> {
    let close_sites = filter_sites(sites, config);
    tracing::info!(
        "{} of {} sites within {} miles",
        close_sites.len(),
        sites.len(),
        config.threshold_miles
    );

    let mut enriched = enrich_sites(&close_sites, config.reference, now)
        .context("Failed to enrich sites")?;

    Reporter::new(&mut *out)
        .write_report(&mut enriched, &config.sort_orders)
        .context("Failed to write report")?;

    if !enriched.is_empty() {
        if let Err(e) = notifier.notify(&enriched, &out.captured_text()) {
            tracing::warn!("Notification failed: {:#}", e);
        }
    }

    Ok(enriched.len())
}
