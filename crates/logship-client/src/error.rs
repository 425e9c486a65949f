use logship_frame::FrameError;
use logship_transport::TransportError;

/// Errors establishing a collector connection.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// The collector socket is unreachable or not listening.
    #[error("cannot reach log collector: {0}")]
    Transport(#[from] TransportError),

    /// The connection was opened but could not be configured.
    #[error("failed to prepare collector connection: {0}")]
    Setup(#[from] FrameError),
}

/// Errors shipping one message on an established connection.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The client has been closed; the message was not shipped.
    #[error("log client is closed")]
    Closed,

    /// Encoding or writing the frame failed.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Error closing the collector connection. Best-effort, non-fatal.
#[derive(Debug, thiserror::Error)]
#[error("failed to close collector connection: {0}")]
pub struct CloseError(#[from] std::io::Error);

/// Error value returned by the `errorf` entry points.
///
/// `Display` is the rendered message text, so the value propagates locally
/// the way a formatted error would. If shipping the message failed, the
/// [`SendError`] is attached as this error's source.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ShippedError {
    message: String,
    source: Option<SendError>,
}

impl ShippedError {
    pub(crate) fn new(message: String, source: Option<SendError>) -> Self {
        Self { message, source }
    }

    /// The rendered message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The delivery failure, if the message did not reach the collector.
    pub fn delivery_failure(&self) -> Option<&SendError> {
        self.source.as_ref()
    }
}
