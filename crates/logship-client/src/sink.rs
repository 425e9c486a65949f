use tracing::warn;

use crate::error::SendError;

/// Receives the delivery failures that fire-and-forget entry points swallow.
///
/// Shipping a log line must never crash or stall the host application, so the
/// `printf`-style calls route failures here instead of returning them. Tests
/// install a recording sink to assert on failure visibility.
pub trait FailureSink: Send + Sync {
    /// Called once per message that failed to reach the collector.
    fn delivery_failed(&self, err: &SendError);
}

/// Default sink: reports delivery failures through `tracing` at WARN.
#[derive(Debug, Default)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn delivery_failed(&self, err: &SendError) {
        warn!(error = %err, "log delivery failed");
    }
}
