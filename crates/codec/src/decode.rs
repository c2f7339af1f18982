//! Bit pattern to native float.

use log::debug;

use crate::convert::{convert, NanPolicy};
use crate::error::CodecError;
use crate::format::Format;

/// Decodes an IEEE-754 binary16 pattern.
///
/// Every half value is exactly representable as `f32`, so the result is exact.
/// NaN patterns decode to a quiet NaN of the same sign, with the payload's bits
/// carried into the top of the `f32` fraction.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::decode_half;
///
/// assert_eq!(decode_half(0x3C00), 1.0);
/// assert_eq!(decode_half(0xC000), -2.0);
/// assert_eq!(decode_half(0x7BFF), 65504.0);
/// assert_eq!(decode_half(0xFC00), f32::NEG_INFINITY);
/// assert!(decode_half(0x7E00).is_nan());
/// assert!(decode_half(0x8000).is_sign_negative());
/// ```
pub fn decode_half(bits: u16) -> f32 {
    f32::from_bits(convert(Format::Half, Format::Single, bits as u64, NanPolicy::Quiet) as u32)
}

/// Decodes an IEEE-754 binary32 pattern. Signaling NaNs come back quieted.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::decode_single;
///
/// assert_eq!(decode_single(0x3F80_0000), 1.0);
/// assert_eq!(decode_single(0x4049_0FDB), std::f32::consts::PI);
/// assert_eq!(decode_single(0xC000_0000), -2.0);
/// ```
pub fn decode_single(bits: u32) -> f32 {
    f32::from_bits(convert(Format::Single, Format::Single, bits as u64, NanPolicy::Quiet) as u32)
}

/// Decodes an IEEE-754 binary64 pattern. Signaling NaNs come back quieted.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::decode_double;
///
/// assert_eq!(decode_double(0x4037_0000_0000_0000), 23.0);
/// assert_eq!(decode_double(0x0000_0000_0000_0001), f64::from_bits(1));
/// ```
pub fn decode_double(bits: u64) -> f64 {
    f64::from_bits(convert(Format::Double, Format::Double, bits, NanPolicy::Quiet))
}

/// Decodes `bits` as `format`, widened to `f64`.
///
/// Fails with [`CodecError::BitsOutOfRange`] when `bits` has set bits above the
/// format's width.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::{decode, CodecError, Format};
///
/// assert_eq!(decode(Format::Half, 0x3C00), Ok(1.0));
/// assert_eq!(decode(Format::Single, 0x4049_0FDB), Ok(std::f32::consts::PI as f64));
/// assert_eq!(
///     decode(Format::Half, 0x1_0000),
///     Err(CodecError::BitsOutOfRange { format: Format::Half, bits: 0x1_0000 })
/// );
/// ```
pub fn decode(format: Format, bits: u64) -> Result<f64, CodecError> {
    if !format.fits(bits) {
        debug!("rejecting {bits:#x}: wider than {format}");
        return Err(CodecError::BitsOutOfRange { format, bits });
    }
    Ok(f64::from_bits(convert(format, Format::Double, bits, NanPolicy::Quiet)))
}
