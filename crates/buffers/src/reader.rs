//! Big-endian binary reader with cursor tracking.

use ieee_fp_codec::{decode, decode_double, decode_half, decode_single, Format};
use log::debug;

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader keeps a cursor position; every read checks the remaining length
/// first and leaves the cursor untouched on [`BufferError::EndOfBuffer`].
///
/// # Example
///
/// ```
/// use ieee_fp_buffers::Reader;
///
/// let data = [0x3C, 0x00, 0x40, 0x49, 0x0F, 0xDB];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.f16().unwrap(), 1.0);
/// assert_eq!(reader.u32().unwrap(), 0x4049_0FDB);
/// assert!(reader.u8().is_err());
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader over `uint8[x..end]`, clamped to the slice length.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        let x = x.min(end);
        Self { uint8, x, end }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.x)
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        Ok(self.uint8[self.x])
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.ensure(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let bin = &self.uint8[self.x..self.x + size];
        self.x += size;
        Ok(bin)
    }

    fn ensure(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if needed > remaining {
            debug!("short read at offset {}: needed {needed}, remaining {remaining}", self.x);
            return Err(BufferError::EndOfBuffer { needed, remaining });
        }
        Ok(())
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.buf(N)?);
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.take::<1>()?[0])
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        self.take().map(u16::from_be_bytes)
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        self.take().map(u32::from_be_bytes)
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self) -> Result<u64, BufferError> {
        self.take().map(u64::from_be_bytes)
    }

    /// Reads a binary16 value (big-endian), widened to `f32`.
    #[inline]
    pub fn f16(&mut self) -> Result<f32, BufferError> {
        self.u16().map(decode_half)
    }

    /// Reads a binary32 value (big-endian).
    #[inline]
    pub fn f32(&mut self) -> Result<f32, BufferError> {
        self.u32().map(decode_single)
    }

    /// Reads a binary64 value (big-endian).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        self.u64().map(decode_double)
    }

    /// Reads a value of the given format (big-endian), widened to `f64`.
    pub fn float(&mut self, format: Format) -> Result<f64, BufferError> {
        let bits = match format {
            Format::Half => self.u16()? as u64,
            Format::Single => self.u32()? as u64,
            Format::Double => self.u64()?,
        };
        Ok(decode(format, bits)?)
    }
}
