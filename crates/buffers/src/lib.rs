//! Byte-level boundary for the IEEE-754 codec.
//!
//! Bit patterns travel as big-endian bytes regardless of host byte order; this
//! crate moves them between byte buffers and native floats through
//! [`ieee_fp_codec`].
//!
//! # Overview
//!
//! - [`Reader`] - Reads big-endian integers and floats from a byte slice with cursor tracking
//! - [`Writer`] - Writes big-endian integers and floats to an auto-growing buffer
//! - [`print_bits`] / [`print_fields`] - Binary digit strings for debugging
//!
//! # Example
//!
//! ```
//! use ieee_fp_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.f16(1.0);
//! writer.f32(-2.0);
//! writer.f64(23.0);
//! let data = writer.flush();
//! assert_eq!(&data[..2], &[0x3C, 0x00]);
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.f16().unwrap(), 1.0);
//! assert_eq!(reader.f32().unwrap(), -2.0);
//! assert_eq!(reader.f64().unwrap(), 23.0);
//! ```

mod print_bits;
mod reader;
mod writer;

pub use print_bits::{print_bits, print_fields};
pub use reader::Reader;
pub use writer::Writer;

use ieee_fp_codec::CodecError;
use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
    #[error(transparent)]
    Codec(#[from] CodecError),
}
