//! Ship process logs to a local collector over a Unix domain socket.
//!
//! logship forwards rendered log text from a process to a local collector
//! daemon as length-prefixed binary frames — a drop-in alternative to console
//! logging with fire-and-forget delivery.
//!
//! # Crate Structure
//!
//! - [`transport`] — Unix domain socket plumbing
//! - [`frame`] — the wire framing codec
//! - [`client`] — the shipping client, process-wide default, signal adapter

/// Re-export transport types.
pub mod transport {
    pub use logship_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use logship_frame::*;
}

/// Re-export client types.
pub mod client {
    pub use logship_client::*;
}

pub use logship_client::{Client, ClientConfig, DEFAULT_SOCKET_PATH};
pub use logship_client::{errorf, printf, println};
