use std::io::{Read, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TransportError};

/// A connected stream to (or from) a log collector.
///
/// Thin wrapper around a Unix domain socket stream. The shipping client only
/// writes; the read half is used by collectors and the test harness.
pub struct SocketStream {
    inner: UnixStream,
}

/// Connect to a listening collector socket (blocking).
pub fn connect(path: impl AsRef<Path>) -> Result<SocketStream> {
    let path = path.as_ref();
    let stream = UnixStream::connect(path).map_err(|e| TransportError::Connect {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(?path, "connected to collector socket");
    Ok(SocketStream::from_unix(stream))
}

impl SocketStream {
    pub(crate) fn from_unix(inner: UnixStream) -> Self {
        Self { inner }
    }

    /// Set read timeout on the underlying socket.
    pub fn set_read_timeout(&self, timeout: Option<std::time::Duration>) -> Result<()> {
        self.inner.set_read_timeout(timeout).map_err(Into::into)
    }

    /// Set write timeout on the underlying socket.
    pub fn set_write_timeout(&self, timeout: Option<std::time::Duration>) -> Result<()> {
        self.inner.set_write_timeout(timeout).map_err(Into::into)
    }

    /// Clone this stream (creates a new file descriptor on the same socket).
    pub fn try_clone(&self) -> Result<Self> {
        let cloned = self.inner.try_clone()?;
        Ok(Self::from_unix(cloned))
    }

    /// Shut down both directions of the socket.
    ///
    /// Used by explicit connection teardown; unlike drop, this makes the
    /// peer observe EOF immediately even if clones of the stream are alive.
    pub fn shutdown(&self) -> std::io::Result<()> {
        self.inner.shutdown(Shutdown::Both)
    }
}

impl Read for SocketStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for SocketStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl std::fmt::Debug for SocketStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocketStream").field("type", &"unix").finish()
    }
}
