//! Sign / exponent / fraction views of a bit pattern.

use crate::class::FloatClass;
use crate::format::Format;

/// The three sub-fields of an IEEE-754 bit pattern.
///
/// `exponent` is the biased field as stored; `fraction` excludes the implicit
/// leading bit.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::{Fields, Format};
///
/// let fields = Fields::split(Format::Half, 0xC000);
/// assert!(fields.sign);
/// assert_eq!(fields.exponent, 16);
/// assert_eq!(fields.fraction, 0);
/// assert_eq!(fields.join(Format::Half), 0xC000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub sign: bool,
    pub exponent: u32,
    pub fraction: u64,
}

impl Fields {
    /// Splits `bits` according to `format`. Bits above the format width are ignored.
    #[inline]
    pub fn split(format: Format, bits: u64) -> Self {
        let bits = bits & format.width_mask();
        Self {
            sign: bits & format.sign_mask() != 0,
            exponent: ((bits & format.exponent_mask()) >> format.fraction_bits()) as u32,
            fraction: bits & format.fraction_mask(),
        }
    }

    /// Packs the fields back into a bit pattern. Out-of-range field values are masked.
    #[inline]
    pub fn join(self, format: Format) -> u64 {
        let sign = if self.sign { format.sign_mask() } else { 0 };
        let exponent = ((self.exponent as u64) << format.fraction_bits()) & format.exponent_mask();
        sign | exponent | (self.fraction & format.fraction_mask())
    }

    /// Classifies the value these fields encode.
    #[inline]
    pub fn class(self, format: Format) -> FloatClass {
        match (self.exponent, self.fraction) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (e, 0) if e == format.max_exponent() => FloatClass::Infinite,
            (e, _) if e == format.max_exponent() => FloatClass::Nan,
            _ => FloatClass::Normal,
        }
    }
}

/// A finite nonzero value as `significand * 2^(exponent - precision)`, where the
/// significand's leading one sits at bit `precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unpacked {
    pub exponent: i32,
    pub significand: u64,
    pub precision: u32,
}

impl Unpacked {
    /// Normalizes a normal or subnormal pattern. Returns `None` for zero,
    /// infinities and NaNs.
    pub fn from_fields(format: Format, fields: Fields) -> Option<Self> {
        let precision = format.fraction_bits();
        match fields.class(format) {
            FloatClass::Normal => Some(Self {
                exponent: fields.exponent as i32 - format.bias(),
                significand: (1 << precision) | fields.fraction,
                precision,
            }),
            FloatClass::Subnormal => {
                let msb = 63 - fields.fraction.leading_zeros();
                let shift = precision - msb;
                Some(Self {
                    exponent: 1 - format.bias() - shift as i32,
                    significand: fields.fraction << shift,
                    precision,
                })
            }
            _ => None,
        }
    }
}
