//! Ships a few messages through the process-wide shipper.
//!
//! Start a collector listening on `/tmp/logship.sock` (or point
//! `LOGSHIP_SOCKET` somewhere else), then:
//!
//! ```sh
//! cargo run -p logship --example ship
//! ```

use logship::client::global;

fn main() {
    if !global::init() {
        eprintln!("collector not reachable; messages will be dropped");
    }
    if let Err(err) = logship::client::signal::shutdown_on_termination() {
        eprintln!("signal hookup failed: {err}");
    }

    logship::println!("shipper online");
    logship::printf!("formatted message with a number: {}", 123);
    global::print("a plain print message");

    if let Some(err) = logship::errorf!("simulated failure {}", 7) {
        eprintln!("local copy: {err}");
    }

    global::shutdown();
}
