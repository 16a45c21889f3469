//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_leader_updates_total` (counter): accepted leader updates
//! - `gateway_leader_gaps_total` (counter): absent-leader notifications
//! - `gateway_discovery_feed_active` (gauge): 1 while the feed is live,
//!   0 once it terminates (upstream list frozen at its last value)

use std::net::SocketAddr;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

const LEADER_UPDATES_TOTAL: &str = "gateway_leader_updates_total";
const LEADER_GAPS_TOTAL: &str = "gateway_leader_gaps_total";
const DISCOVERY_FEED_ACTIVE: &str = "gateway_discovery_feed_active";

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(LEADER_UPDATES_TOTAL, "Accepted cluster leader updates");
            describe_counter!(LEADER_GAPS_TOTAL, "Absent-leader notifications ignored");
            describe_gauge!(
                DISCOVERY_FEED_ACTIVE,
                "1 while the discovery feed is live, 0 after it terminates"
            );
            tracing::info!(address = %addr, "metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to install metrics exporter");
        }
    }
}

/// Record an accepted leader update.
pub fn record_leader_update() {
    counter!(LEADER_UPDATES_TOTAL).increment(1);
}

/// Record an absent-leader notification.
pub fn record_leader_gap() {
    counter!(LEADER_GAPS_TOTAL).increment(1);
}

/// Mark the discovery feed live or terminated.
pub fn record_feed_active(active: bool) {
    gauge!(DISCOVERY_FEED_ACTIVE).set(if active { 1.0 } else { 0.0 });
}
