//! Value classification derived from the exponent and fraction fields.

use crate::fields::Fields;
use crate::format::Format;

/// IEEE-754 value category of a bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

impl FloatClass {
    #[inline]
    pub fn is_finite(self) -> bool {
        !matches!(self, FloatClass::Infinite | FloatClass::Nan)
    }
}

/// Classifies `bits` in `format`. Bits above the format width are ignored.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::{classify, FloatClass, Format};
///
/// assert_eq!(classify(Format::Half, 0x8000), FloatClass::Zero);
/// assert_eq!(classify(Format::Half, 0x03FF), FloatClass::Subnormal);
/// assert_eq!(classify(Format::Half, 0x3C00), FloatClass::Normal);
/// assert_eq!(classify(Format::Half, 0xFC00), FloatClass::Infinite);
/// assert_eq!(classify(Format::Half, 0x7D00), FloatClass::Nan);
/// ```
pub fn classify(format: Format, bits: u64) -> FloatClass {
    Fields::split(format, bits).class(format)
}

/// Returns `true` unless `bits` is a NaN other than the canonical quiet NaN
/// of either sign.
///
/// Canonical patterns are exactly the ones `encode(decode(b)) == b` holds for.
pub fn is_canonical(format: Format, bits: u64) -> bool {
    let bits = bits & format.width_mask();
    match classify(format, bits) {
        FloatClass::Nan => bits & !format.sign_mask() == format.canonical_nan(),
        _ => true,
    }
}
