use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logship_frame::{FrameConfig, FrameWriter};
use logship_transport::SocketStream;
use tracing::warn;

use crate::config::ClientConfig;
use crate::error::{CloseError, ConnectError, SendError, ShippedError};
use crate::sink::{FailureSink, TracingSink};

/// A connected log-shipping client.
///
/// One client owns one collector connection. It is shared by reference;
/// every send encodes and writes its frame under a single lock, so frames
/// from concurrent callers never interleave on the wire and the collector
/// never observes a partial frame.
pub struct Client {
    writer: Mutex<Option<FrameWriter<SocketStream>>>,
    client_id: i32,
    sink: Arc<dyn FailureSink>,
}

impl Client {
    /// Connect to the collector at the well-known socket path.
    pub fn connect() -> Result<Self, ConnectError> {
        Self::connect_with(ClientConfig::default())
    }

    /// Connect to the collector at an explicit socket path.
    pub fn connect_to(path: impl Into<PathBuf>) -> Result<Self, ConnectError> {
        Self::connect_with(ClientConfig {
            socket_path: path.into(),
            ..ClientConfig::default()
        })
    }

    /// Connect with explicit configuration.
    pub fn connect_with(config: ClientConfig) -> Result<Self, ConnectError> {
        let stream = logship_transport::connect(&config.socket_path)?;
        let frame_config = FrameConfig {
            max_payload_size: config.max_payload_size,
            read_timeout: None,
            write_timeout: config.write_timeout,
        };
        let writer = FrameWriter::with_config_socket(stream, frame_config)?;
        let client_id = config.client_id.unwrap_or(std::process::id() as i32);

        Ok(Self {
            writer: Mutex::new(Some(writer)),
            client_id,
            sink: Arc::new(TracingSink),
        })
    }

    /// Replace the delivery-failure sink.
    ///
    /// The sink receives every failure that the fire-and-forget entry points
    /// swallow.
    pub fn with_failure_sink(mut self, sink: Arc<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Id stamped on every frame this client ships.
    pub fn client_id(&self) -> i32 {
        self.client_id
    }

    /// Whether [`close`](Self::close) has already run.
    pub fn is_closed(&self) -> bool {
        self.lock_writer().is_none()
    }

    /// Ship one payload as a single frame.
    ///
    /// Fire-and-forget: there is no retry and no buffering, so a failed send
    /// is a lost message. Returns [`SendError::Closed`] once the client has
    /// been closed, including when a close races this call.
    pub fn send(&self, payload: &[u8]) -> Result<(), SendError> {
        let mut guard = self.lock_writer();
        let writer = guard.as_mut().ok_or(SendError::Closed)?;
        writer.send(self.client_id, payload)?;
        Ok(())
    }

    /// Render a formatted message and ship it, swallowing failures.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        if let Some(text) = render(args) {
            self.ship_quiet(text.as_bytes());
        }
    }

    /// Render a formatted message, trim one trailing line separator, ship it.
    pub fn println(&self, args: fmt::Arguments<'_>) {
        if let Some(text) = render(args) {
            self.ship_quiet(trim_line(&text).as_bytes());
        }
    }

    /// Ship a single displayable value.
    pub fn print(&self, value: impl fmt::Display) {
        self.printf(format_args!("{value}"));
    }

    /// Render, ship, and return the message as an error for local propagation.
    ///
    /// The returned error displays the rendered text. If delivery failed, the
    /// [`SendError`] rides along as the error's source — this is the one entry
    /// point where a send failure is visible to the caller.
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> ShippedError {
        match render(args) {
            Some(text) => {
                let delivery = self.send(text.as_bytes()).err();
                ShippedError::new(text, delivery)
            }
            None => ShippedError::new(String::new(), None),
        }
    }

    /// Close the collector connection.
    ///
    /// Idempotent: closing an already-closed client returns `Ok`. The writer
    /// is taken out under the send lock, so an in-flight send completes its
    /// frame first and a later one observes [`SendError::Closed`] — never a
    /// half-closed handle.
    pub fn close(&self) -> Result<(), CloseError> {
        let taken = self.lock_writer().take();
        match taken {
            Some(writer) => match writer.into_inner().shutdown() {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotConnected => Ok(()),
                Err(err) => Err(CloseError::from(err)),
            },
            None => Ok(()),
        }
    }

    fn ship_quiet(&self, payload: &[u8]) {
        if let Err(err) = self.send(payload) {
            self.sink.delivery_failed(&err);
        }
    }

    // A panicked send cannot leave a partial frame (the whole frame is one
    // buffer), so a poisoned lock is safe to keep using.
    fn lock_writer(&self) -> MutexGuard<'_, Option<FrameWriter<SocketStream>>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("client_id", &self.client_id)
            .finish()
    }
}

fn render(args: fmt::Arguments<'_>) -> Option<String> {
    let mut text = String::new();
    match fmt::write(&mut text, args) {
        Ok(()) => Some(text),
        Err(err) => {
            // Formatting must not take the host down; drop the message.
            warn!(error = %err, "failed to render log message");
            None
        }
    }
}

fn trim_line(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => text,
    }
}
