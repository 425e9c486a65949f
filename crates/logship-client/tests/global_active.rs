//! Lifecycle of the process-wide shipper with a reachable collector.
//!
//! The shipper is a process-wide singleton, so the whole active lifecycle
//! lives in one test function; the disabled path has its own test binary.

use std::path::PathBuf;
use std::thread;

use logship_client::{global, ClientConfig};
use logship_frame::{Frame, FrameError, FrameReader};
use logship_transport::Listener;

fn make_sock_path() -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/logship-global-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir.join("collector.sock")
}

#[test]
fn global_lifecycle_active_then_closed() {
    let sock_path = make_sock_path();
    let listener = Listener::bind(&sock_path).expect("stub should bind");
    let stub = thread::spawn(move || {
        let stream = listener.accept().expect("stub should accept");
        let mut reader = FrameReader::new(stream);
        let mut frames: Vec<Frame> = Vec::new();
        loop {
            match reader.read_frame() {
                Ok(frame) => frames.push(frame),
                Err(FrameError::ConnectionClosed) => break,
                Err(err) => panic!("stub read failed: {err}"),
            }
        }
        frames
    });

    let config = ClientConfig {
        socket_path: sock_path.clone(),
        ..ClientConfig::default()
    };
    assert!(global::init_with(config), "shipper should be active");
    assert!(global::is_active());

    // Later init calls do not re-attempt or reconfigure.
    assert!(global::init());

    logship_client::printf!("formatted {}", 1);
    logship_client::println!("line {}\n", 2);
    global::print("plain");

    let err = logship_client::errorf!("shipped {}", 3).expect("active shipper returns the error");
    assert_eq!(err.to_string(), "shipped 3");
    assert!(err.delivery_failure().is_none());

    global::shutdown();
    assert!(!global::is_active());

    // Closed state: everything is a silent no-op.
    logship_client::printf!("dropped");
    logship_client::println!("dropped too");
    assert!(logship_client::errorf!("gone").is_none());
    global::shutdown(); // second shutdown is a no-op as well

    let frames = stub.join().expect("stub thread should finish");
    let payloads: Vec<&[u8]> = frames.iter().map(|f| f.payload.as_ref()).collect();
    let expected: [&[u8]; 4] = [b"formatted 1", b"line 2", b"plain", b"shipped 3"];
    assert_eq!(payloads, expected);
    for frame in &frames {
        assert_eq!(frame.client_id, std::process::id() as i32);
    }

    if let Some(parent) = sock_path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

#[cfg(feature = "signal")]
#[test]
fn termination_handler_installs_once() {
    // Only asserts installation; delivering a real signal would tear down the
    // whole test process.
    logship_client::signal::shutdown_on_termination().expect("handler should install");
    assert!(logship_client::signal::shutdown_on_termination().is_err());
}
