//! The three IEEE-754 interchange layouts handled by the codec.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// An IEEE-754 binary interchange format.
///
/// | Format | Total | Exponent bits | Bias | Fraction bits |
/// |---|---|---|---|---|
/// | [`Format::Half`] | 16 | 5 | 15 | 10 |
/// | [`Format::Single`] | 32 | 8 | 127 | 23 |
/// | [`Format::Double`] | 64 | 11 | 1023 | 52 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// binary16
    Half,
    /// binary32
    Single,
    /// binary64
    Double,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Half, Format::Single, Format::Double];

    /// Total storage width in bits.
    #[inline]
    pub const fn total_bits(self) -> u32 {
        match self {
            Format::Half => 16,
            Format::Single => 32,
            Format::Double => 64,
        }
    }

    #[inline]
    pub const fn exponent_bits(self) -> u32 {
        match self {
            Format::Half => 5,
            Format::Single => 8,
            Format::Double => 11,
        }
    }

    #[inline]
    pub const fn fraction_bits(self) -> u32 {
        match self {
            Format::Half => 10,
            Format::Single => 23,
            Format::Double => 52,
        }
    }

    /// Exponent bias: `2^(exponent_bits - 1) - 1`.
    #[inline]
    pub const fn bias(self) -> i32 {
        (1 << (self.exponent_bits() - 1)) - 1
    }

    /// The all-ones biased exponent reserved for infinities and NaNs.
    #[inline]
    pub const fn max_exponent(self) -> u32 {
        (1 << self.exponent_bits()) - 1
    }

    /// Mask covering every bit of the format's storage.
    #[inline]
    pub const fn width_mask(self) -> u64 {
        u64::MAX >> (64 - self.total_bits())
    }

    #[inline]
    pub const fn sign_mask(self) -> u64 {
        1 << (self.total_bits() - 1)
    }

    #[inline]
    pub const fn exponent_mask(self) -> u64 {
        (self.max_exponent() as u64) << self.fraction_bits()
    }

    #[inline]
    pub const fn fraction_mask(self) -> u64 {
        (1 << self.fraction_bits()) - 1
    }

    /// Most significant fraction bit; set on quiet NaNs.
    #[inline]
    pub const fn quiet_bit(self) -> u64 {
        1 << (self.fraction_bits() - 1)
    }

    /// Positive canonical quiet NaN: exponent all ones, only the fraction MSB set.
    #[inline]
    pub const fn canonical_nan(self) -> u64 {
        self.exponent_mask() | self.quiet_bit()
    }

    #[inline]
    pub const fn infinity(self) -> u64 {
        self.exponent_mask()
    }

    #[inline]
    pub const fn min_positive_subnormal(self) -> u64 {
        1
    }

    #[inline]
    pub const fn min_positive_normal(self) -> u64 {
        1 << self.fraction_bits()
    }

    /// Largest finite magnitude (e.g. `0x7BFF` = 65504 for binary16).
    #[inline]
    pub const fn max_finite(self) -> u64 {
        self.exponent_mask() - 1
    }

    /// Returns `true` when `bits` has no set bits above the format's width.
    #[inline]
    pub const fn fits(self, bits: u64) -> bool {
        bits & !self.width_mask() == 0
    }

    /// The IEEE-754 interchange name.
    pub const fn name(self) -> &'static str {
        match self {
            Format::Half => "binary16",
            Format::Single => "binary32",
            Format::Double => "binary64",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half" | "binary16" | "f16" | "float16" => Ok(Format::Half),
            "single" | "float" | "binary32" | "f32" | "float32" => Ok(Format::Single),
            "double" | "binary64" | "f64" | "float64" => Ok(Format::Double),
            _ => Err(CodecError::UnknownFormat(s.to_string())),
        }
    }
}
