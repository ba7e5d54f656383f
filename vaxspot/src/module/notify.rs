//! Notification hook
//!
//! Called after the report has been printed, only when sites were found.
//! Lock-file dedup and mail delivery live outside this crate; the default
//! sink does nothing.

use crate::module::site::EnrichedSite;

pub trait NotificationSink {
    /// `report` is the full captured report text.
    fn notify(&self, sites: &[EnrichedSite<'_>], report: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl NotificationSink for NoopNotifier {
    fn notify(&self, sites: &[EnrichedSite<'_>], _report: &str) -> anyhow::Result<()> {
        tracing::debug!("No notifier configured, skipping notification for {} sites", sites.len());
        Ok(())
    }
}
