//! Master discovery poll client.
//!
//! # Responsibilities
//! - Poll the configured master discovery endpoint
//! - Translate responses into leadership-change notifications
//! - Feed the master monitor bridge through a bounded channel
//!
//! # Design Decisions
//! - A failed or malformed poll is a transient gap (absent leader), never
//!   fatal; the monitor keeps the last published address
//! - Only changes are forwarded, so the bridge does not rewrite the same
//!   address once per poll interval

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc};
use tokio::time::sleep;

use crate::config::schema::DiscoveryConfig;
use crate::discovery::leader::LeaderDescriptor;

/// Capacity of the notification channel between client and monitor.
const FEED_CAPACITY: usize = 16;

/// Error type for discovery client construction.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid discovery endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build discovery HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Polls the master discovery endpoint and produces the leadership feed.
#[derive(Debug)]
pub struct MasterEndpointClient {
    http: reqwest::Client,
    endpoint: Url,
    poll_interval: Duration,
    feed: mpsc::Sender<Option<LeaderDescriptor>>,
    last_observed: Option<LeaderDescriptor>,
}

impl MasterEndpointClient {
    /// Build a client for the configured endpoint.
    ///
    /// Returns the client and the receiving side of the leadership feed,
    /// which the master monitor consumes.
    pub fn new(
        config: &DiscoveryConfig,
    ) -> Result<(Self, mpsc::Receiver<Option<LeaderDescriptor>>), DiscoveryError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| DiscoveryError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let (tx, rx) = mpsc::channel(FEED_CAPACITY);

        let client = Self {
            http,
            endpoint,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            feed: tx,
            last_observed: None,
        };

        Ok((client, rx))
    }

    /// Poll until shutdown is signalled or the feed consumer goes away.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            endpoint = %self.endpoint,
            interval_ms = self.poll_interval.as_millis() as u64,
            "master discovery poll client starting"
        );

        loop {
            let observed = self.fetch().await;

            if observed != self.last_observed {
                if self.feed.send(observed.clone()).await.is_err() {
                    tracing::debug!("leadership feed consumer gone; poll client stopping");
                    return;
                }
                self.last_observed = observed;
            }

            tokio::select! {
                _ = shutdown.recv() => {
                    tracing::debug!("master discovery poll client stopping");
                    return;
                }
                _ = sleep(self.poll_interval) => {}
            }
        }
    }

    /// Fetch the current leader, treating every failure as an absent leader.
    async fn fetch(&self) -> Option<LeaderDescriptor> {
        let response = match self.http.get(self.endpoint.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "master discovery poll failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "master discovery endpoint returned error");
            return None;
        }

        match response.json::<LeaderDescriptor>().await {
            Ok(leader) => Some(leader),
            Err(e) => {
                tracing::warn!(error = %e, "malformed master descriptor");
                None
            }
        }
    }
}
