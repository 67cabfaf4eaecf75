//! Metrics facade for the greeting service.
//!
//! Only counters are recorded. No exporter is installed, so these are no-ops
//! unless an embedding process registers a recorder.

use metrics::{counter, describe_counter};
use tracing::debug;

/// Greetings served counter metric name.
pub const METRIC_GREETINGS_SERVED: &str = "greetings_served_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_GREETINGS_SERVED,
        "Total number of greetings served"
    );

    debug!("Metrics initialized");
}

/// Increment greetings served counter.
pub fn inc_greetings_served() {
    counter!(METRIC_GREETINGS_SERVED).increment(1);
}
