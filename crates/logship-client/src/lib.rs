//! Log shipping client.
//!
//! This is the "just works" layer: connect once, then call the formatting
//! entry points and every rendered message reaches the collector as one
//! wire frame. Shipping is fire-and-forget — a failed send is reported to a
//! pluggable [`FailureSink`] and the message is lost, never retried, never
//! buffered, and never allowed to crash or stall the host application.
//!
//! Two surfaces:
//! - [`Client`] — an explicit, shareable connection with its own lifecycle.
//! - [`global`] — a process-wide default with an `init`/`shutdown` pair, a
//!   drop-in macro surface ([`printf!`](crate::printf),
//!   [`println!`](crate::println), [`errorf!`](crate::errorf)), and an
//!   optional [`signal`] adapter that closes it on interrupt/terminate.

pub mod client;
pub mod config;
pub mod error;
pub mod global;
mod macros;
#[cfg(feature = "signal")]
pub mod signal;
pub mod sink;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_SOCKET_PATH, SOCKET_PATH_ENV};
pub use error::{CloseError, ConnectError, SendError, ShippedError};
pub use sink::{FailureSink, TracingSink};
