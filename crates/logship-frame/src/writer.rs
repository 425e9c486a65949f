use std::io::{ErrorKind, Write};

use bytes::BytesMut;
use logship_transport::SocketStream;

use crate::codec::{encode_frame, Frame, FrameConfig};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;

/// Writes complete frames to any `Write` stream.
///
/// Each `send` encodes one frame and writes it contiguously; a frame is never
/// split across writes visible to the caller, and the encode buffer is reused
/// between sends.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
}

impl<T: Write> FrameWriter<T> {
    /// Create a new frame writer with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame writer with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Write a complete frame (blocking).
    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.send(frame.client_id, frame.payload.as_ref())
    }

    /// Encode and write one payload as a single frame.
    ///
    /// Only `ErrorKind::Interrupted` is retried; a zero-length write means
    /// the peer is gone. There is no message-level retry or buffering — a
    /// failed frame is lost.
    pub fn send(&mut self, client_id: i32, payload: &[u8]) -> Result<()> {
        if payload.len() > self.config.max_payload_size {
            return Err(FrameError::PayloadTooLarge {
                size: payload.len(),
                max: self.config.max_payload_size,
            });
        }

        self.buf.clear();
        encode_frame(client_id, payload, &mut self.buf)?;

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame writer configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl FrameWriter<SocketStream> {
    /// Create a frame writer for `SocketStream` and apply the write timeout
    /// from config.
    pub fn with_config_socket(inner: SocketStream, config: FrameConfig) -> Result<Self> {
        inner
            .set_write_timeout(config.write_timeout)
            .map_err(transport_to_frame_error)?;
        Ok(Self::with_config(inner, config))
    }
}

fn transport_to_frame_error(err: logship_transport::TransportError) -> FrameError {
    match err {
        logship_transport::TransportError::Io(io)
        | logship_transport::TransportError::Accept(io) => FrameError::Io(io),
        logship_transport::TransportError::Bind { source, .. }
        | logship_transport::TransportError::Connect { source, .. } => FrameError::Io(source),
        other => FrameError::Io(std::io::Error::other(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use bytes::BytesMut;

    use super::*;
    use crate::codec::decode_frame;

    #[test]
    fn write_single_frame() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        writer.send(1, b"hello").unwrap();

        let inner = writer.into_inner();
        let mut wire = BytesMut::from(inner.into_inner().as_slice());
        let frame = decode_frame(&mut wire, usize::MAX).unwrap().unwrap();
        assert_eq!(frame.client_id, 1);
        assert_eq!(frame.payload.as_ref(), b"hello");
    }

    #[test]
    fn write_multiple_frames() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        writer.send(1, b"one").unwrap();
        writer.send(1, b"two").unwrap();
        writer.send(1, b"three").unwrap();

        let inner = writer.into_inner();
        let mut wire = BytesMut::from(inner.into_inner().as_slice());

        let f1 = decode_frame(&mut wire, usize::MAX).unwrap().unwrap();
        let f2 = decode_frame(&mut wire, usize::MAX).unwrap().unwrap();
        let f3 = decode_frame(&mut wire, usize::MAX).unwrap().unwrap();

        assert_eq!(f1.payload.as_ref(), b"one");
        assert_eq!(f2.payload.as_ref(), b"two");
        assert_eq!(f3.payload.as_ref(), b"three");
    }

    #[test]
    fn payload_too_large_rejected() {
        let cfg = FrameConfig {
            max_payload_size: 4,
            ..FrameConfig::default()
        };
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::with_config(cursor, cfg);

        let err = writer.send(1, b"oversized").unwrap_err();
        assert!(matches!(err, FrameError::PayloadTooLarge { .. }));
    }

    #[test]
    fn empty_payload_writes_header_only_frame() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        writer.send(12, b"").unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.len(), crate::codec::HEADER_SIZE);
    }

    #[test]
    fn flush_propagates() {
        let sink = FlushTrackingWriter::default();
        let flag = Arc::clone(&sink.flushed);
        let mut writer = FrameWriter::new(sink);

        writer.send(1, b"x").unwrap();

        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn write_frame_method() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);
        let frame = Frame::new(2, "abc");

        writer.write_frame(&frame).unwrap();

        let inner = writer.into_inner();
        let mut wire = BytesMut::from(inner.into_inner().as_slice());
        let decoded = decode_frame(&mut wire, usize::MAX).unwrap().unwrap();

        assert_eq!(decoded.client_id, 2);
        assert_eq!(decoded.payload.as_ref(), b"abc");
    }

    #[test]
    fn handles_interrupted_write_and_flush() {
        let writer_impl = InterruptedWriteThenFlush {
            wrote_once: false,
            flush_interrupted: false,
            data: Vec::new(),
        };

        let mut writer = FrameWriter::new(writer_impl);
        writer.send(5, b"retry").unwrap();

        let inner = writer.into_inner();
        assert!(!inner.data.is_empty());
    }

    #[test]
    fn connection_closed_when_write_returns_zero() {
        let mut writer = FrameWriter::new(ZeroWriter);
        let err = writer.send(1, b"x").unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn would_block_write_is_an_error_not_a_spin() {
        let mut writer = FrameWriter::new(WouldBlockWriter);
        let err = writer.send(1, b"x").unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == ErrorKind::WouldBlock));
    }

    #[derive(Default)]
    struct FlushTrackingWriter {
        flushed: Arc<AtomicBool>,
        data: Vec<u8>,
    }

    impl Write for FlushTrackingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct InterruptedWriteThenFlush {
        wrote_once: bool,
        flush_interrupted: bool,
        data: Vec<u8>,
    }

    impl Write for InterruptedWriteThenFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.wrote_once {
                self.wrote_once = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            if !self.flush_interrupted {
                self.flush_interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct WouldBlockWriter;

    impl Write for WouldBlockWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::WouldBlock))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn applies_write_timeout_for_socket_stream() {
        let dir = std::env::temp_dir().join(format!(
            "logship-frame-timeout-writer-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let sock_path = dir.join("test.sock");
        let listener = logship_transport::Listener::bind(&sock_path).unwrap();

        let path_clone = sock_path.clone();
        let connector =
            std::thread::spawn(move || logship_transport::connect(path_clone).unwrap());
        let stream = listener.accept().unwrap();
        let _client = connector.join().unwrap();

        let cfg = FrameConfig {
            write_timeout: Some(std::time::Duration::from_millis(10)),
            ..FrameConfig::default()
        };

        let writer = FrameWriter::with_config_socket(stream, cfg);
        assert!(writer.is_ok());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn written_bytes_decode() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut writer = FrameWriter::new(cursor);

        writer.send(3, b"z").unwrap();

        let wire = writer.into_inner().into_inner();
        let mut framed = crate::reader::FrameReader::new(Cursor::new(wire));
        let frame = framed.read_frame().unwrap();
        assert_eq!(frame.client_id, 3);
        assert_eq!(frame.payload.as_ref(), b"z");
    }
}
