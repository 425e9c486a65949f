//! Optional adapter wiring process termination signals to
//! [`global::shutdown`](crate::global::shutdown).

use crate::global;

/// Error installing the termination handler.
#[derive(Debug, thiserror::Error)]
#[error("failed to install termination handler: {0}")]
pub struct SignalError(#[from] ctrlc::Error);

/// Close the process-wide shipper when the process is interrupted or
/// terminated.
///
/// Best-effort cleanup, not guaranteed delivery of in-flight messages. The
/// handler calls [`global::shutdown`], which is one-shot and safe to race
/// with an explicit shutdown. The handler thread is detached and never keeps
/// the process alive.
///
/// The process-wide signal-handler slot is claimed by this call, and the
/// handler only closes the shipper — the application remains responsible for
/// actually exiting on these signals.
pub fn shutdown_on_termination() -> Result<(), SignalError> {
    ctrlc::set_handler(global::shutdown)?;
    Ok(())
}
