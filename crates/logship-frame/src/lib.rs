//! Length-prefixed wire framing for logship log shipping.
//!
//! Every shipped message is one frame:
//! - A 4-byte big-endian signed client id (the shipping process)
//! - A 4-byte big-endian unsigned payload length
//! - The payload bytes, no terminator, no escaping
//!
//! Byte order is fixed big-endian on both integer fields — the collector
//! decodes exactly this layout, so it is protocol, not preference. The
//! shipping client only encodes; [`decode_frame`] and [`FrameReader`] are the
//! collector/harness side of the same codec.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_frame, encode_frame, Frame, FrameConfig, DEFAULT_MAX_PAYLOAD, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
