//! Format-to-format repacking shared by decode and encode.
//!
//! Every conversion goes through the same path: split the source pattern into
//! fields, normalize finite nonzero values to a significand/exponent pair, then
//! repack into the destination layout with round-half-to-even.

use log::trace;

use crate::class::FloatClass;
use crate::fields::{Fields, Unpacked};
use crate::format::Format;

/// What to do with the fraction of a NaN input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NanPolicy {
    /// Force the quiet bit and carry the payload's high bits across.
    Quiet,
    /// Replace every NaN with the canonical quiet NaN.
    Canonical,
}

/// Re-encodes `bits` from `src` into `dst`, keeping the sign in every case.
pub(crate) fn convert(src: Format, dst: Format, bits: u64, nan: NanPolicy) -> u64 {
    let fields = Fields::split(src, bits);
    let sign = if fields.sign { dst.sign_mask() } else { 0 };

    if let Some(unpacked) = Unpacked::from_fields(src, fields) {
        return sign | pack(dst, unpacked);
    }
    match fields.class(src) {
        FloatClass::Infinite => sign | dst.infinity(),
        FloatClass::Nan => sign | nan_bits(src, dst, fields.fraction, nan),
        _ => sign,
    }
}

fn nan_bits(src: Format, dst: Format, fraction: u64, policy: NanPolicy) -> u64 {
    match policy {
        NanPolicy::Canonical => {
            if fraction != src.quiet_bit() {
                trace!("{src} NaN payload {fraction:#x} replaced by canonical {dst} NaN");
            }
            dst.canonical_nan()
        }
        NanPolicy::Quiet => {
            let payload = if dst.fraction_bits() >= src.fraction_bits() {
                fraction << (dst.fraction_bits() - src.fraction_bits())
            } else {
                fraction >> (src.fraction_bits() - dst.fraction_bits())
            };
            dst.exponent_mask() | dst.quiet_bit() | (payload & dst.fraction_mask())
        }
    }
}

/// Packs a finite nonzero magnitude into `dst`. The sign is applied by the caller.
fn pack(dst: Format, value: Unpacked) -> u64 {
    let precision = dst.fraction_bits();
    // `extra` is how many low significand bits the destination cannot hold.
    let (significand, extra) = if value.precision >= precision {
        (value.significand, value.precision - precision)
    } else {
        (value.significand << (precision - value.precision), 0)
    };

    let biased = value.exponent + dst.bias();
    if biased >= dst.max_exponent() as i32 {
        trace!("{dst} overflow: exponent {} saturates to infinity", value.exponent);
        return dst.infinity();
    }

    if biased >= 1 {
        // The rounded significand still carries its implicit one, so adding it on
        // top of `biased - 1` lets a rounding carry bump the exponent field. A
        // carry out of the largest binade lands exactly on infinity.
        return (((biased - 1) as u64) << precision) + round_half_even(significand, extra);
    }

    // Subnormal range: shift further right so the exponent field becomes zero.
    let shift = extra + (1 - biased) as u32;
    if shift > precision + extra + 1 {
        trace!("{dst} underflow: exponent {} flushes to zero", value.exponent);
        return 0;
    }
    let rounded = round_half_even(significand, shift);
    if rounded == 0 {
        trace!("{dst} underflow: exponent {} rounds to zero", value.exponent);
    }
    rounded
}

/// Drops the low `shift` bits of `value`, rounding to nearest with ties to even.
#[inline]
pub(crate) fn round_half_even(value: u64, shift: u32) -> u64 {
    if shift == 0 {
        return value;
    }
    debug_assert!(shift < 64);
    let quotient = value >> shift;
    let remainder = value & ((1 << shift) - 1);
    let half = 1 << (shift - 1);
    if remainder > half || (remainder == half && quotient & 1 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
