//! Payload-preserving decode/encode.
//!
//! [`decode`](crate::decode) and [`encode`](crate::encode) fold every NaN into a
//! single quiet NaN per sign. [`Decoded`] keeps the NaN fraction as an explicit
//! payload so that every bit pattern survives a round trip.

use crate::class::FloatClass;
use crate::decode::decode;
use crate::encode::encode;
use crate::error::CodecError;
use crate::fields::Fields;
use crate::format::Format;

/// A decoded value that remembers NaN payload bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoded {
    /// Zero, subnormal, normal or infinite value, widened to `f64`.
    Number(f64),
    /// NaN with its sign and raw fraction field (quiet bit included).
    Nan { negative: bool, payload: u64 },
}

impl Decoded {
    pub fn is_nan(&self) -> bool {
        matches!(self, Decoded::Nan { .. })
    }

    /// Collapses to a plain `f64`; NaN payloads are reduced to a quiet NaN.
    pub fn to_f64(self) -> f64 {
        match self {
            Decoded::Number(value) => value,
            Decoded::Nan { negative: true, .. } => -f64::NAN,
            Decoded::Nan { negative: false, .. } => f64::NAN,
        }
    }
}

/// Decodes `bits` as `format`, keeping the raw payload of NaN patterns.
///
/// # Example
///
/// ```
/// use ieee_fp_codec::{decode_exact, Decoded, Format};
///
/// assert_eq!(
///     decode_exact(Format::Half, 0xFD01),
///     Ok(Decoded::Nan { negative: true, payload: 0x101 })
/// );
/// assert_eq!(decode_exact(Format::Half, 0x3C00), Ok(Decoded::Number(1.0)));
/// ```
pub fn decode_exact(format: Format, bits: u64) -> Result<Decoded, CodecError> {
    let value = decode(format, bits)?;
    let fields = Fields::split(format, bits);
    Ok(match fields.class(format) {
        FloatClass::Nan => Decoded::Nan {
            negative: fields.sign,
            payload: fields.fraction,
        },
        _ => Decoded::Number(value),
    })
}

/// Encodes a [`Decoded`] value into `format`.
///
/// NaN payloads are masked to the fraction width; a payload that masks to zero
/// would read back as infinity, so the quiet bit is used instead. Numbers are
/// encoded with [`encode`](crate::encode).
///
/// # Example
///
/// ```
/// use ieee_fp_codec::{decode_exact, encode_exact, Format};
///
/// let decoded = decode_exact(Format::Double, 0x7FF4_0000_0000_0001).unwrap();
/// assert_eq!(encode_exact(Format::Double, &decoded), 0x7FF4_0000_0000_0001);
/// ```
pub fn encode_exact(format: Format, value: &Decoded) -> u64 {
    match *value {
        Decoded::Number(number) => encode(format, number),
        Decoded::Nan { negative, payload } => {
            let fraction = match payload & format.fraction_mask() {
                0 => format.quiet_bit(),
                fraction => fraction,
            };
            Fields {
                sign: negative,
                exponent: format.max_exponent(),
                fraction,
            }
            .join(format)
        }
    }
}
