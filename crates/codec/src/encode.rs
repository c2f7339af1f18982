//! Native float to bit pattern.
//!
//! Rounding is round-half-to-even for both mantissa truncation and the shift
//! into the subnormal range. Magnitudes past the largest finite value saturate
//! to infinity, and magnitudes at or below half the smallest subnormal flush
//! to zero. Signs are always kept, including on zero.
//!
//! NaN inputs encode to the canonical quiet NaN of the format (exponent all
//! ones, fraction MSB set) with the input's sign. Any other payload bits are
//! dropped; use [`crate::encode_exact`] to keep them.

use crate::convert::{convert, NanPolicy};
use crate::format::Format;

/// Encodes an `f32` as binary16, rounding half to even.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::encode_half;
///
/// assert_eq!(encode_half(1.0), 0x3C00);
/// assert_eq!(encode_half(-2.0), 0xC000);
/// assert_eq!(encode_half(65504.0), 0x7BFF);
/// assert_eq!(encode_half(1.0e6), 0x7C00);
/// assert_eq!(encode_half(-0.0), 0x8000);
/// assert_eq!(encode_half(f32::NAN), 0x7E00);
/// ```
pub fn encode_half(value: f32) -> u16 {
    convert(Format::Single, Format::Half, value.to_bits() as u64, NanPolicy::Canonical) as u16
}

/// Encodes an `f32` as binary32.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::encode_single;
///
/// assert_eq!(encode_single(std::f32::consts::PI), 0x4049_0FDB);
/// assert_eq!(encode_single(f32::NEG_INFINITY), 0xFF80_0000);
/// ```
pub fn encode_single(value: f32) -> u32 {
    convert(Format::Single, Format::Single, value.to_bits() as u64, NanPolicy::Canonical) as u32
}

/// Encodes an `f64` as binary64.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::encode_double;
///
/// assert_eq!(encode_double(23.0), 0x4037_0000_0000_0000);
/// assert_eq!(encode_double(-f64::NAN), 0xFFF8_0000_0000_0000);
/// ```
pub fn encode_double(value: f64) -> u64 {
    convert(Format::Double, Format::Double, value.to_bits(), NanPolicy::Canonical)
}

/// Encodes an `f64` into `format` with a single rounding step.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::{encode, Format};
///
/// assert_eq!(encode(Format::Half, 1.0), 0x3C00);
/// assert_eq!(encode(Format::Single, 0.1), 0x3DCC_CCCD);
/// assert_eq!(encode(Format::Double, 23.0), 0x4037_0000_0000_0000);
/// ```
pub fn encode(format: Format, value: f64) -> u64 {
    convert(Format::Double, format, value.to_bits(), NanPolicy::Canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_signed_zero() {
        assert_eq!(encode_half(0.0), 0x0000);
        assert_eq!(encode_half(-0.0), 0x8000);
    }

    #[test]
    fn half_rounds_mantissa_half_to_even() {
        // 1 + 2^-11 sits exactly between 0x3C00 and 0x3C01.
        assert_eq!(encode_half(1.0 + 2f32.powi(-11)), 0x3C00);
        // 1 + 3 * 2^-11 sits between 0x3C01 and 0x3C02; the even one wins.
        assert_eq!(encode_half(1.0 + 3.0 * 2f32.powi(-11)), 0x3C02);
        assert_eq!(encode_half(1.0 + 2f32.powi(-11) + 2f32.powi(-20)), 0x3C01);
    }

    #[test]
    fn half_subnormal_range() {
        let smallest = 2f32.powi(-24);
        assert_eq!(encode_half(smallest), 0x0001);
        assert_eq!(encode_half(-smallest), 0x8001);
        // Exactly half the smallest subnormal ties to the even result, zero.
        assert_eq!(encode_half(smallest / 2.0), 0x0000);
        assert_eq!(encode_half(-smallest / 2.0), 0x8000);
        assert_eq!(encode_half(smallest * 0.75), 0x0001);
        assert_eq!(encode_half(smallest * 1.5), 0x0002);
        assert_eq!(encode_half(smallest * 2.5), 0x0002);
        assert_eq!(encode_half(f32::MIN_POSITIVE), 0x0000);
        // Rounding the largest subnormal up carries into the smallest normal.
        assert_eq!(encode_half(1023.75 * smallest), 0x0400);
    }

    #[test]
    fn half_overflow() {
        assert_eq!(encode_half(65504.0), 0x7BFF);
        assert_eq!(encode_half(65519.0), 0x7BFF);
        assert_eq!(encode_half(65520.0), 0x7C00);
        assert_eq!(encode_half(-1.0e10), 0xFC00);
        assert_eq!(encode_half(f32::MAX), 0x7C00);
    }

    #[test]
    fn nan_sign_is_kept() {
        assert_eq!(encode_half(-f32::NAN), 0xFE00);
        assert_eq!(encode_single(f32::from_bits(0x7FA0_0001)), 0x7FC0_0000);
        assert_eq!(encode_single(f32::from_bits(0xFF80_0001)), 0xFFC0_0000);
        assert_eq!(encode_double(f64::from_bits(0x7FF0_0000_0000_0001)), 0x7FF8_0000_0000_0000);
    }

    #[test]
    fn single_passes_through_numbers() {
        for value in [0.0f32, -0.0, 1.0, -2.5, f32::MAX, f32::MIN_POSITIVE, f32::from_bits(1)] {
            assert_eq!(encode_single(value), value.to_bits());
        }
    }

    #[test]
    fn generic_single_matches_native_cast() {
        for value in [0.1f64, 1.0 / 3.0, 1.0e-40, 3.4028235677973366e38, 1.0e39, -7.0e-46] {
            assert_eq!(encode(Format::Single, value), (value as f32).to_bits() as u64, "{value:e}");
        }
    }

    #[test]
    fn generic_double_smallest_subnormal() {
        assert_eq!(encode(Format::Double, f64::from_bits(1)), 1);
        assert_eq!(encode(Format::Double, -f64::from_bits(1)), 0x8000_0000_0000_0001);
    }
}
