//! VaccineSpotter feed client
//!
//! One GET per run. No retries; a bad status is reported to the caller.

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use super::error::FetchError;
use super::parser::parse_feed;
use super::types::Site;
use crate::config::SearchConfig;

const USER_AGENT: &str = concat!("vaxspot/", env!("CARGO_PKG_VERSION"));

/// Inclusive on both ends: a 300 response is still read as a feed.
pub fn is_success_status(status: u16) -> bool {
    (200..=300).contains(&status)
}

pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    pub fn new(config: &SearchConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.feed_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse the feed.
    pub async fn fetch_sites(&self) -> Result<Vec<Site>, FetchError> {
        tracing::info!("Fetching appointment feed from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status().as_u16();
        if !is_success_status(status) {
            tracing::error!("Feed request to {} returned HTTP {}", self.url, status);
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let sites = parse_feed(&body)?;

        tracing::info!("Feed returned {} sites", sites.len());
        Ok(sites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert!(!is_success_status(199));
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(is_success_status(300));
        assert!(!is_success_status(301));
        assert!(!is_success_status(404));
        assert!(!is_success_status(500));
    }

    #[test]
    fn test_client_uses_config_url() {
        let config = SearchConfig {
            state: "wa".to_string(),
            ..SearchConfig::default()
        };
        let client = FeedClient::new(&config).unwrap();
        assert_eq!(
            client.url(),
            "https://www.vaccinespotter.org/api/v0/states/WA.json"
        );
    }

    #[tokio::test]
    #[ignore] // Requires network connection
    async fn test_fetch_sites() {
        let client = FeedClient::new(&SearchConfig::default()).unwrap();
        let sites = client.fetch_sites().await.unwrap();
        assert!(sites.iter().all(|site| !site.id.is_empty()));
    }
}
