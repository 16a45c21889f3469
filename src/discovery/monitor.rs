//! Master monitor bridge.
//!
//! # Responsibilities
//! - Consume the leadership feed, one notification at a time
//! - Republish each new leader address into the upstream-servers property
//! - Preserve the last published address across discovery gaps
//!
//! # Design Decisions
//! - Sole writer of the upstream-servers property; the single feed receiver
//!   serializes writes even when producers deliver from multiple tasks
//! - Feed termination is degraded-but-running, not fatal: the property stays
//!   frozen at its last value and the condition is logged and metered

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::config::dynamic::StringProperty;
use crate::discovery::leader::LeaderDescriptor;
use crate::observability::metrics;

/// Bridges the cluster leadership feed into dynamic configuration.
pub struct MasterMonitor {
    feed: mpsc::Receiver<Option<LeaderDescriptor>>,
    upstream_servers: Arc<StringProperty>,
}

impl MasterMonitor {
    /// Create a bridge consuming `feed` and writing to `upstream_servers`.
    pub fn new(
        feed: mpsc::Receiver<Option<LeaderDescriptor>>,
        upstream_servers: Arc<StringProperty>,
    ) -> Self {
        Self {
            feed,
            upstream_servers,
        }
    }

    /// Run until the feed terminates or shutdown is signalled.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        metrics::record_feed_active(true);

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    tracing::debug!("master monitor stopping");
                    break;
                }
                notification = self.feed.recv() => match notification {
                    Some(Some(leader)) => self.apply(leader),
                    Some(None) => {
                        tracing::debug!("no current cluster leader; keeping last published address");
                        metrics::record_leader_gap();
                    }
                    None => {
                        tracing::warn!(
                            last_published = ?self.upstream_servers.get(),
                            "discovery feed terminated; upstream server list is frozen"
                        );
                        metrics::record_feed_active(false);
                        return;
                    }
                },
            }
        }

        metrics::record_feed_active(false);
    }

    fn apply(&self, leader: LeaderDescriptor) {
        let endpoint = leader.endpoint();
        tracing::info!(leader = %endpoint, "received new cluster master");
        self.upstream_servers.set(endpoint);
        metrics::record_leader_update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    fn bridge(
        capacity: usize,
    ) -> (
        mpsc::Sender<Option<LeaderDescriptor>>,
        MasterMonitor,
        Arc<StringProperty>,
    ) {
        let (tx, rx) = mpsc::channel(capacity);
        let property = Arc::new(StringProperty::unset());
        let monitor = MasterMonitor::new(rx, property.clone());
        (tx, monitor, property)
    }

    #[tokio::test]
    async fn publishes_formatted_leader_address() {
        let shutdown = Shutdown::new();
        let (tx, monitor, property) = bridge(4);
        let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

        tx.send(Some(LeaderDescriptor::new("10.0.0.5", 7101)))
            .await
            .unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(property.get().unwrap().as_str(), "10.0.0.5:7101");
    }

    #[tokio::test]
    async fn absent_leader_preserves_last_value() {
        let shutdown = Shutdown::new();
        let (tx, monitor, property) = bridge(4);
        let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

        tx.send(Some(LeaderDescriptor::new("10.0.0.5", 7101)))
            .await
            .unwrap();
        tx.send(None).await.unwrap();
        tx.send(Some(LeaderDescriptor::new("10.0.0.9", 7101)))
            .await
            .unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(property.get().unwrap().as_str(), "10.0.0.9:7101");
    }

    #[tokio::test]
    async fn absent_leader_without_prior_value_stays_unset() {
        let shutdown = Shutdown::new();
        let (tx, monitor, property) = bridge(4);
        let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

        tx.send(None).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert!(!property.is_set());
    }

    #[tokio::test]
    async fn feed_termination_freezes_property() {
        let shutdown = Shutdown::new();
        let (tx, monitor, property) = bridge(4);
        let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

        tx.send(Some(LeaderDescriptor::new("10.0.0.5", 7101)))
            .await
            .unwrap();
        drop(tx);
        // run() exits on feed termination, with the last value retained.
        handle.await.unwrap();

        assert_eq!(property.get().unwrap().as_str(), "10.0.0.5:7101");
    }

    #[tokio::test]
    async fn updates_apply_in_delivery_order() {
        let shutdown = Shutdown::new();
        let (tx, monitor, property) = bridge(64);
        let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

        for n in 1..=50u16 {
            tx.send(Some(LeaderDescriptor::new("10.0.0.5", 7000 + n)))
                .await
                .unwrap();
        }
        drop(tx);
        handle.await.unwrap();

        assert_eq!(property.get().unwrap().as_str(), "10.0.0.5:7050");
    }

    #[tokio::test]
    async fn shutdown_stops_the_bridge() {
        let shutdown = Shutdown::new();
        let (tx, monitor, property) = bridge(4);
        let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

        shutdown.trigger();
        handle.await.unwrap();

        assert!(!property.is_set());
        drop(tx);
    }
}
