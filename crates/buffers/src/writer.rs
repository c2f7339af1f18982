//! Big-endian binary writer backed by a growable buffer.

use ieee_fp_codec::{encode, encode_double, encode_half, encode_single, Format};

/// Writes big-endian integers and IEEE-754 values into an auto-growing buffer.
///
/// # Example
///
/// ```
/// use ieee_fp_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.f32(std::f32::consts::PI);
/// writer.f16(-0.0);
/// assert_eq!(writer.flush(), [0x40, 0x49, 0x0F, 0xDB, 0x80, 0x00]);
/// assert!(writer.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Returns the written bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    #[inline]
    pub fn u8(&mut self, value: u8) {
        self.uint8.push(value);
    }

    #[inline]
    pub fn u16(&mut self, value: u16) {
        self.uint8.extend_from_slice(&value.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, value: u32) {
        self.uint8.extend_from_slice(&value.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, value: u64) {
        self.uint8.extend_from_slice(&value.to_be_bytes());
    }

    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes `value` as binary16, rounding half to even.
    #[inline]
    pub fn f16(&mut self, value: f32) {
        self.u16(encode_half(value));
    }

    #[inline]
    pub fn f32(&mut self, value: f32) {
        self.u32(encode_single(value));
    }

    #[inline]
    pub fn f64(&mut self, value: f64) {
        self.u64(encode_double(value));
    }

    /// Writes `value` in `format`, using the format's storage width.
    pub fn float(&mut self, format: Format, value: f64) {
        let bits = encode(format, value);
        match format {
            Format::Half => self.u16(bits as u16),
            Format::Single => self.u32(bits as u32),
            Format::Double => self.u64(bits),
        }
    }
}
