//! The process-wide shipper with an unreachable collector: everything
//! degrades to silent no-ops. Separate test binary because the singleton
//! outcome is process-wide.

use std::path::PathBuf;

use logship_client::{global, ClientConfig};

#[test]
fn unreachable_collector_disables_the_shipper() {
    let config = ClientConfig {
        socket_path: PathBuf::from(format!(
            "/tmp/logship-disabled-{}/nobody-home.sock",
            std::process::id()
        )),
        ..ClientConfig::default()
    };

    assert!(!global::init_with(config), "shipper should be disabled");
    assert!(!global::is_active());

    // No-ops: no panic, no error, no blocking.
    logship_client::printf!("dropped {}", 1);
    logship_client::println!("dropped {}", 2);
    global::print("dropped");
    assert!(logship_client::errorf!("dropped {}", 3).is_none());

    // Shutdown of a disabled shipper is safe, as is repeating it.
    global::shutdown();
    global::shutdown();
    assert!(!global::is_active());
}
