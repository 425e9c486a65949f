use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Frame header: client id (4) + payload length (4) = 8 bytes.
pub const HEADER_SIZE: usize = 8;

/// Default maximum payload size: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// One shipped log message as it appears on the wire.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Id of the shipping process, assigned once at connection creation.
    pub client_id: i32,
    /// The rendered message bytes.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(client_id: i32, payload: impl Into<Bytes>) -> Self {
        Self {
            client_id,
            payload: payload.into(),
        }
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────┬──────────────────┐
/// │ Client id    │ Length       │ Payload           │
/// │ (4B BE i32)  │ (4B BE u32)  │ (Length bytes)    │
/// └──────────────┴──────────────┴──────────────────┘
/// ```
///
/// A zero-length payload is legal and produces an 8-byte frame.
pub fn encode_frame(client_id: i32, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > u32::MAX as usize {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: u32::MAX as usize,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_i32(client_id);
    dst.put_u32(payload.len() as u32);
    dst.put_slice(payload);
    Ok(())
}

/// Decode a frame from a buffer (collector/harness side).
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet.
/// On success, consumes the frame bytes from the buffer.
pub fn decode_frame(src: &mut BytesMut, max_payload: usize) -> Result<Option<Frame>> {
    if src.len() < HEADER_SIZE {
        return Ok(None); // Need more data
    }

    let client_id = i32::from_be_bytes(src[0..4].try_into().unwrap());
    let payload_len = u32::from_be_bytes(src[4..8].try_into().unwrap()) as usize;

    if payload_len > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: payload_len,
            max: max_payload,
        });
    }

    let total = HEADER_SIZE + payload_len;
    if src.len() < total {
        return Ok(None); // Need more data
    }

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();

    Ok(Some(Frame { client_id, payload }))
}

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: 16 MiB.
    pub max_payload_size: usize,
    /// Read timeout for blocking operations.
    pub read_timeout: Option<std::time::Duration>,
    /// Write timeout for blocking operations.
    pub write_timeout: Option<std::time::Duration>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
            read_timeout: None,
            write_timeout: None,
        }
    }
}
