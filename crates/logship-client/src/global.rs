//! Process-wide default shipper.
//!
//! A zero-configuration surface over one lazily-created [`Client`]: the first
//! use (or an explicit [`init`]) attempts the collector connection exactly
//! once. If that fails the shipper is *disabled* and every call here is a
//! silent no-op for the rest of the process — logging must not break the
//! host. [`shutdown`] is the other end of the lifecycle: one-shot, safe to
//! race from the signal adapter, and terminal.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::ShippedError;

static SHIPPER: OnceLock<GlobalShipper> = OnceLock::new();

struct GlobalShipper {
    /// `None` means the connection attempt failed: permanently disabled.
    client: Option<Client>,
    closed: AtomicBool,
}

impl GlobalShipper {
    fn connect(config: ClientConfig) -> Self {
        let client = match Client::connect_with(config) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "process-wide log shipping disabled");
                None
            }
        };
        Self {
            client,
            closed: AtomicBool::new(false),
        }
    }

    fn active(&self) -> Option<&Client> {
        if self.closed.load(Ordering::Acquire) {
            return None;
        }
        self.client.as_ref()
    }
}

fn instance() -> &'static GlobalShipper {
    SHIPPER.get_or_init(|| GlobalShipper::connect(ClientConfig::default()))
}

/// Initialize the process-wide shipper with the default configuration.
///
/// Returns whether shipping is active. See [`init_with`].
pub fn init() -> bool {
    init_with(ClientConfig::default())
}

/// Initialize the process-wide shipper.
///
/// The connection attempt happens at most once per process: the first of
/// `init`, `init_with`, or any convenience call wins, and later calls see
/// that outcome. A failed attempt degrades to the disabled state (all calls
/// become no-ops) rather than returning an error — there is no reconnect.
pub fn init_with(config: ClientConfig) -> bool {
    SHIPPER
        .get_or_init(|| GlobalShipper::connect(config))
        .active()
        .is_some()
}

/// Whether the process-wide shipper has a live connection.
///
/// Never triggers the connection attempt itself.
pub fn is_active() -> bool {
    SHIPPER.get().is_some_and(|s| s.active().is_some())
}

/// Ship a formatted message through the process-wide shipper.
pub fn printf(args: fmt::Arguments<'_>) {
    if let Some(client) = instance().active() {
        client.printf(args);
    }
}

/// Ship a formatted message, trimming one trailing line separator.
pub fn println(args: fmt::Arguments<'_>) {
    if let Some(client) = instance().active() {
        client.println(args);
    }
}

/// Ship a single displayable value.
pub fn print(value: impl fmt::Display) {
    if let Some(client) = instance().active() {
        client.print(value);
    }
}

/// Ship a formatted message and return it as an error for local propagation.
///
/// Returns `None` when the shipper is disabled or closed — the no-op states
/// produce no error value at all.
pub fn errorf(args: fmt::Arguments<'_>) -> Option<ShippedError> {
    instance().active().map(|client| client.errorf(args))
}

/// Tear down the process-wide shipper.
///
/// One-shot: the first call — explicit or from the signal adapter — closes
/// the connection; every later call is a no-op, as is every convenience call
/// from then on. Never initiates a connection: a process that never shipped
/// is left untouched.
pub fn shutdown() {
    let Some(shipper) = SHIPPER.get() else {
        return;
    };
    if shipper.closed.swap(true, Ordering::AcqRel) {
        return; // already closed
    }
    if let Some(client) = &shipper.client {
        if let Err(err) = client.close() {
            debug!(error = %err, "collector connection close failed");
        }
    }
}
