//! Metrics collection and exposition.
//!
//! # Metrics
//! - `checkmate_ui_analyses_total` (counter): analyzer calls by outcome
//! - `checkmate_ui_toggles_total` (counter): toggles by part and direction
//! - `checkmate_ui_active_sessions` (gauge): sessions held in memory

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one analyzer call; `outcome` is "ok" or an error kind.
pub fn record_analysis(outcome: &'static str) {
    counter!("checkmate_ui_analyses_total", "outcome" => outcome).increment(1);
}

pub fn record_toggle(part: &'static str, enabled: bool) {
    let direction = if enabled { "enable" } else { "disable" };
    counter!("checkmate_ui_toggles_total", "part" => part, "direction" => direction).increment(1);
}

pub fn record_active_sessions(count: usize) {
    gauge!("checkmate_ui_active_sessions").set(count as f64);
}
